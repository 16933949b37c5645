//! Field validators.
//!
//! Every validator maps a candidate value to an error message, the empty
//! string meaning "valid". They are pure: calling them repeatedly, or while a
//! view is rendering, has no effect on the form.
//!
//! Phone correctness is delegated to the phone widget through
//! [`PhoneValidity`]; this module never parses numbers itself.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::{ErrorMap, FieldMap, FormValues};
use crate::model::{Field, UNSET};

static NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern compiles"));

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// What the validators need from the phone widget.
pub trait PhoneValidity {
    /// Whether the widget considers the current number valid for its detected region.
    fn is_valid_number(&self) -> bool;
}

/// Per-field error messages from one validation pass. Never stored as-is;
/// the form state copies it into its own error map.
pub type ValidationResult = ErrorMap;

pub fn validate_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "Name is required".to_string();
    }
    if trimmed.chars().count() < 2 {
        return "Name must be at least 2 characters".to_string();
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        return "Name cannot contain numbers".to_string();
    }
    if !NAME_CHARS.is_match(name) {
        return "Name can only contain letters and spaces".to_string();
    }
    String::new()
}

/// `widget` is `None` until the phone widget has attached to its input.
pub fn validate_phone(widget: Option<&dyn PhoneValidity>, raw: &str) -> String {
    let Some(widget) = widget else {
        return "Phone number is required".to_string();
    };
    if raw.trim().is_empty() {
        return "Phone number is required".to_string();
    }
    if !widget.is_valid_number() {
        return "Please enter a valid phone number".to_string();
    }
    String::new()
}

pub fn validate_email(email: &str) -> String {
    if email.trim().is_empty() {
        return "Email is required".to_string();
    }
    if !EMAIL_SHAPE.is_match(email) {
        return "Please enter a valid email address".to_string();
    }
    String::new()
}

pub fn validate_select(value: &str, label: &str) -> String {
    if value == UNSET {
        return format!("{label} is required");
    }
    String::new()
}

pub fn validate_terms(accepted: bool) -> String {
    if !accepted {
        return "You must accept the terms and conditions".to_string();
    }
    String::new()
}

/// Runs the validator that belongs to `field` against the current values.
pub fn validate_field(
    field: Field,
    values: &FormValues,
    phone: Option<&dyn PhoneValidity>,
) -> String {
    match field {
        Field::FirstName => validate_name(&values.first_name),
        Field::Phone => validate_phone(phone, &values.phone),
        Field::Email => validate_email(&values.email),
        Field::PropertyLocation | Field::Profession => {
            validate_select(values.text(field), field.label())
        }
        Field::Terms => validate_terms(values.terms),
    }
}

pub fn validate_values(values: &FormValues, phone: Option<&dyn PhoneValidity>) -> ValidationResult {
    FieldMap::from_fn(|field| validate_field(field, values, phone))
}
