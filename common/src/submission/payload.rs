use serde::{Deserialize, Serialize};

use crate::form::FormValues;
use crate::model::Field;

/// Snapshot of the form values sent to the intake endpoint.
///
/// Taken right after a successful validation pass; `phone` is the widget's
/// normalized number, copied verbatim from the form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub property_location: String,
    pub profession: String,
    pub terms: bool,
}

impl SubmissionPayload {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            phone: values.phone.clone(),
            email: values.email.clone(),
            property_location: values.property_location.clone(),
            profession: values.profession.clone(),
            terms: values.terms,
        }
    }

    /// Form-encoded fields in intake order. The consent flag is sent as
    /// `true`/`false`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        Field::ALL
            .into_iter()
            .map(|field| {
                let value = match field {
                    Field::FirstName => self.first_name.clone(),
                    Field::Phone => self.phone.clone(),
                    Field::Email => self.email.clone(),
                    Field::PropertyLocation => self.property_location.clone(),
                    Field::Profession => self.profession.clone(),
                    Field::Terms => self.terms.to_string(),
                };
                (field.name(), value)
            })
            .collect()
    }
}
