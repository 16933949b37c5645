use serde::{Deserialize, Serialize};
use std::fmt;

/// The six fields of the lead form.
///
/// The order of `Field::ALL` is the order fields are rendered, validated and
/// serialized into the intake payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "propertyLocation")]
    PropertyLocation,
    #[serde(rename = "profession")]
    Profession,
    #[serde(rename = "terms")]
    Terms,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::Phone,
        Field::Email,
        Field::PropertyLocation,
        Field::Profession,
        Field::Terms,
    ];

    /// Name used for the DOM `name`/`id` attributes and the intake form keys.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::PropertyLocation => "propertyLocation",
            Field::Profession => "profession",
            Field::Terms => "terms",
        }
    }

    /// Human label used in "<label> is required" messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "Name",
            Field::Phone => "Phone number",
            Field::Email => "Email",
            Field::PropertyLocation => "Property Location",
            Field::Profession => "Profession",
            Field::Terms => "Terms",
        }
    }

    /// Resolves a DOM `name` attribute back to a field.
    ///
    /// Unknown names (including retired inputs such as `lastName`) yield `None`.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value written into the form state by a change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("firstName", Some(Field::FirstName))]
    #[case("propertyLocation", Some(Field::PropertyLocation))]
    #[case("terms", Some(Field::Terms))]
    #[case("lastName", None)]
    #[case("preferredOffice", None)]
    fn test_from_name(#[case] name: &str, #[case] expected: Option<Field>) {
        assert_eq!(Field::from_name(name), expected);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Field::PropertyLocation).unwrap();
        assert_eq!(json, "\"propertyLocation\"");
    }
}
