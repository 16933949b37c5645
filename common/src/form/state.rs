//! The form state store.
//!
//! `FormState` owns the values, per-field errors, per-field touched flags and
//! the instance id of the current form generation. Every mutation replaces a
//! whole field entry or a whole map, and `reset` swaps the entire state in one
//! assignment, so nothing observes a half-reset form.

use log::{debug, warn};

use super::events::{FormEvent, InstanceId};
use super::field_map::{ErrorMap, TouchedMap};
use super::values::FormValues;
use crate::model::{Field, FieldValue};
use crate::validation::{PhoneValidity, validate_field, validate_values};

/// How a field should be styled, derived from its touched flag and error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            FieldStatus::Untouched => "",
            FieldStatus::Valid => "is-valid",
            FieldStatus::Invalid => "is-invalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: ErrorMap,
    touched: TouchedMap,
    instance_id: InstanceId,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// A blank form with a fresh instance id.
    pub fn new() -> Self {
        Self {
            values: FormValues::default(),
            errors: ErrorMap::default(),
            touched: TouchedMap::default(),
            instance_id: InstanceId::new(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedMap {
        &self.touched
    }

    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    /// Writes a new value for `field`.
    ///
    /// A pending error on the field is cleared right away; the next blur or
    /// submit recomputes it. For `Field::Phone` the caller passes the number
    /// normalized by the phone widget.
    ///
    /// Returns `false` if the event belongs to an older form instance or the
    /// value kind does not fit the field.
    pub fn set_value(&mut self, instance: InstanceId, field: Field, value: FieldValue) -> bool {
        if !self.is_current(instance) {
            return false;
        }
        if !self.values.set(field, value) {
            warn!("ignoring value of the wrong kind for field {field}");
            return false;
        }
        if !self.errors[field].is_empty() {
            self.errors[field] = String::new();
        }
        true
    }

    /// Blur handling: marks `field` touched and stores its validator's verdict.
    pub fn blur(
        &mut self,
        instance: InstanceId,
        field: Field,
        phone: Option<&dyn PhoneValidity>,
    ) -> bool {
        if !self.is_current(instance) {
            return false;
        }
        let error = validate_field(field, &self.values, phone);
        self.mark_touched(field);
        self.set_error(field, error);
        true
    }

    pub fn mark_touched(&mut self, field: Field) {
        self.touched[field] = true;
    }

    pub fn set_error(&mut self, field: Field, message: impl Into<String>) {
        self.errors[field] = message.into();
    }

    /// Validates every field, replaces the error map, marks every field
    /// touched and reports whether the form is submittable.
    pub fn validate_all(&mut self, phone: Option<&dyn PhoneValidity>) -> bool {
        self.errors = validate_values(&self.values, phone);
        self.touched = TouchedMap::from_fn(|_| true);
        self.errors.is_clean()
    }

    /// Clears the form and starts a new instance.
    pub fn reset(&mut self) {
        let previous = self.instance_id;
        *self = FormState::new();
        debug!("form instance {previous} replaced by {}", self.instance_id);
    }

    /// Applies one input event. Returns whether the state changed.
    pub fn apply(&mut self, event: FormEvent, phone: Option<&dyn PhoneValidity>) -> bool {
        match event {
            FormEvent::Changed {
                instance,
                field,
                value,
            } => self.set_value(instance, field, value),
            FormEvent::Blurred { instance, field } => self.blur(instance, field, phone),
        }
    }

    /// The error to display next to `field`, if any. Errors stay hidden
    /// until the field is touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        let error = &self.errors[field];
        (self.touched[field] && !error.is_empty()).then_some(error.as_str())
    }

    pub fn field_status(&self, field: Field) -> FieldStatus {
        match (self.touched[field], self.errors[field].is_empty()) {
            (false, _) => FieldStatus::Untouched,
            (true, true) => FieldStatus::Valid,
            (true, false) => FieldStatus::Invalid,
        }
    }

    fn is_current(&self, instance: InstanceId) -> bool {
        if instance != self.instance_id {
            debug!(
                "dropping event for stale form instance {instance} (current {})",
                self.instance_id
            );
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubPhone, valid_state};

    fn text(value: &str) -> FieldValue {
        FieldValue::text(value)
    }

    #[test]
    fn test_new_state_is_blank() {
        let state = FormState::new();
        assert_eq!(state.values(), &FormValues::default());
        assert!(state.errors().is_clean());
        assert!(state.touched().values().all(|t| !t));
        for field in Field::ALL {
            assert_eq!(state.field_status(field), FieldStatus::Untouched);
        }
    }

    #[test]
    fn test_blank_name_blur_then_fix() {
        let mut state = FormState::new();
        let id = state.instance_id();

        assert!(state.blur(id, Field::FirstName, None));
        assert!(state.touched()[Field::FirstName]);
        assert_eq!(state.errors()[Field::FirstName], "Name is required");
        assert_eq!(state.visible_error(Field::FirstName), Some("Name is required"));
        assert_eq!(state.field_status(Field::FirstName).css_class(), "is-invalid");

        assert!(state.set_value(id, Field::FirstName, text("Ravi")));
        assert!(state.blur(id, Field::FirstName, None));
        assert_eq!(state.errors()[Field::FirstName], "");
        assert_eq!(state.visible_error(Field::FirstName), None);
        assert_eq!(state.field_status(Field::FirstName).css_class(), "is-valid");
    }

    #[test]
    fn test_set_value_clears_error_optimistically() {
        let mut state = FormState::new();
        let id = state.instance_id();
        state.blur(id, Field::Email, None);
        assert!(!state.errors()[Field::Email].is_empty());

        state.set_value(id, Field::Email, text("not-yet-an-email"));
        assert_eq!(state.errors()[Field::Email], "");
        assert!(state.touched()[Field::Email]);
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut state = FormState::new();
        state.set_error(Field::Email, "Email is required");
        assert_eq!(state.visible_error(Field::Email), None);
        state.mark_touched(Field::Email);
        assert_eq!(state.visible_error(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_validate_all_passes_when_every_field_is_valid() {
        let mut state = valid_state();
        assert!(state.validate_all(Some(&StubPhone(true))));
        assert!(state.errors().is_clean());
        assert!(state.touched().values().all(|t| *t));
    }

    #[test]
    fn test_validate_all_flags_single_invalid_field() {
        let mut state = valid_state();
        let id = state.instance_id();
        state.set_value(id, Field::Terms, FieldValue::Checked(false));

        assert!(!state.validate_all(Some(&StubPhone(true))));
        assert_eq!(
            state.errors()[Field::Terms],
            "You must accept the terms and conditions"
        );
        for field in Field::ALL.into_iter().filter(|f| *f != Field::Terms) {
            assert_eq!(state.errors()[field], "", "{field} should be valid");
        }
    }

    #[test]
    fn test_validate_all_uses_phone_widget_verdict() {
        let mut state = valid_state();
        assert!(!state.validate_all(Some(&StubPhone(false))));
        assert_eq!(
            state.errors()[Field::Phone],
            "Please enter a valid phone number"
        );
        assert!(!state.validate_all(None));
        assert_eq!(state.errors()[Field::Phone], "Phone number is required");
    }

    #[test]
    fn test_reset_restores_initial_state_with_new_instance() {
        let mut state = valid_state();
        state.validate_all(Some(&StubPhone(true)));
        let old_id = state.instance_id();

        state.reset();

        let blank = FormState::new();
        assert_ne!(state.instance_id(), old_id);
        assert_eq!(state.values(), blank.values());
        assert_eq!(state.errors(), blank.errors());
        assert_eq!(state.touched(), blank.touched());
    }

    #[test]
    fn test_stale_instance_events_are_dropped() {
        let mut state = FormState::new();
        let old_id = state.instance_id();
        state.reset();

        assert!(!state.set_value(old_id, Field::FirstName, text("Ravi")));
        assert!(!state.blur(old_id, Field::FirstName, None));
        assert_eq!(state.values().first_name, "");
        assert!(!state.touched()[Field::FirstName]);
    }

    #[test]
    fn test_apply_routes_events_in_order() {
        let mut state = FormState::new();
        let instance = state.instance_id();
        let events = [
            FormEvent::Changed {
                instance,
                field: Field::Profession,
                value: text("Salaried"),
            },
            FormEvent::Blurred {
                instance,
                field: Field::Profession,
            },
        ];
        for event in events {
            assert!(state.apply(event, None));
        }
        assert_eq!(state.values().profession, "Salaried");
        assert_eq!(state.field_status(Field::Profession), FieldStatus::Valid);
    }

    #[test]
    fn test_wrong_value_kind_is_ignored() {
        let mut state = FormState::new();
        let id = state.instance_id();
        assert!(!state.set_value(id, Field::Terms, text("on")));
        assert!(!state.values().terms);
    }
}
