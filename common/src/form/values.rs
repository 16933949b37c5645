use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldValue};

/// Current values of the form.
///
/// `phone` always holds the number as normalized by the phone widget
/// (`+919876543210`), never the raw keystrokes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub property_location: String,
    pub profession: String,
    pub terms: bool,
}

impl FormValues {
    /// Text content of a field; the consent checkbox has none.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::PropertyLocation => &self.property_location,
            Field::Profession => &self.profession,
            Field::Terms => "",
        }
    }

    /// Writes `value` into `field`.
    ///
    /// Returns `false` without touching anything when the value kind does not
    /// match the field (text for the checkbox, or a checked flag for a text input).
    pub fn set(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::Terms, FieldValue::Checked(checked)) => {
                self.terms = checked;
                true
            }
            (_, FieldValue::Checked(_)) => false,
            (field, FieldValue::Text(text)) => match self.text_slot(field) {
                Some(slot) => {
                    *slot = text;
                    true
                }
                None => false,
            },
        }
    }

    fn text_slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::Phone => Some(&mut self.phone),
            Field::Email => Some(&mut self.email),
            Field::PropertyLocation => Some(&mut self.property_location),
            Field::Profession => Some(&mut self.profession),
            Field::Terms => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_mismatched_kind() {
        let mut values = FormValues::default();
        assert!(!values.set(Field::Terms, FieldValue::text("yes")));
        assert!(!values.set(Field::Email, FieldValue::Checked(true)));
        assert_eq!(values, FormValues::default());
    }

    #[test]
    fn test_set_and_read_back() {
        let mut values = FormValues::default();
        assert!(values.set(Field::PropertyLocation, FieldValue::text("Indore")));
        assert!(values.set(Field::Terms, FieldValue::Checked(true)));
        assert_eq!(values.text(Field::PropertyLocation), "Indore");
        assert!(values.terms);
        assert_eq!(values.text(Field::Terms), "");
    }
}
