use std::ops::{Index, IndexMut};

use crate::model::Field;

/// A value per form field.
///
/// Backed by a fixed array indexed by `Field`, so every map always carries
/// exactly the six field keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMap<T> {
    slots: [T; 6],
}

impl<T> FieldMap<T> {
    pub fn from_fn(mut f: impl FnMut(Field) -> T) -> Self {
        Self {
            slots: Field::ALL.map(|field| f(field)),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }
}

impl<T> Index<Field> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: Field) -> &T {
        &self.slots[field.index()]
    }
}

impl<T> IndexMut<Field> for FieldMap<T> {
    fn index_mut(&mut self, field: Field) -> &mut T {
        &mut self.slots[field.index()]
    }
}

/// Per-field error messages; an empty string means the field is valid.
pub type ErrorMap = FieldMap<String>;

impl ErrorMap {
    pub fn is_clean(&self) -> bool {
        self.values().all(String::is_empty)
    }
}

/// Per-field touched flags.
pub type TouchedMap = FieldMap<bool>;
