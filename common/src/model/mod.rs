//! Field model of the lead form: the closed set of fields, the values a change
//! event can carry, and the fixed option lists rendered by the select inputs.

mod field;

pub use field::{Field, FieldValue};

/// Value of a select that has no option chosen yet.
pub const UNSET: &str = "";

/// Options of the `profession` select, in display order.
pub const PROFESSIONS: [&str; 3] = ["Salaried", "Business Owner", "Retired / pensioner"];
