use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::model::{Field, FieldValue};

/// Identifies one generation of the form.
///
/// Rotated by `FormState::reset`; widget callbacks capture the id that was
/// current when they were bound so late events can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discrete input event addressed to the form state.
///
/// DOM handlers and widget callbacks never touch the state directly: they
/// emit one of these and a single consumer applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// An input, select or widget reported a new value.
    Changed {
        instance: InstanceId,
        field: Field,
        value: FieldValue,
    },
    /// The user left a field.
    Blurred { instance: InstanceId, field: Field },
}

impl FormEvent {
    pub fn instance(&self) -> InstanceId {
        match self {
            FormEvent::Changed { instance, .. } | FormEvent::Blurred { instance, .. } => *instance,
        }
    }

    pub fn field(&self) -> Field {
        match self {
            FormEvent::Changed { field, .. } | FormEvent::Blurred { field, .. } => *field,
        }
    }
}
