//! Properties of the `LeadFormComponent`.
//!
//! Every endpoint defaults to the value baked in at build time (see
//! `crate::config`); a parent may point the form somewhere else, for instance
//! a staging intake script.

use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq, Clone)]
pub struct LeadFormProps {
    #[prop_or(AttrValue::Static(config::INTAKE_URL))]
    pub intake_url: AttrValue,

    #[prop_or(AttrValue::Static(config::NOTIFY_URL))]
    pub notify_url: AttrValue,

    #[prop_or(AttrValue::Static(config::CITIES_URL))]
    pub cities_url: AttrValue,
}
