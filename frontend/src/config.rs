//! Endpoints and log level, fixed at build time.
//!
//! Each value can be overridden by setting the matching environment variable
//! when the bundle is built (`LEAD_INTAKE_URL=... trunk build`). Nothing
//! secret lives here: the notification credential is held by the relay.

use log::LevelFilter;

/// Lead intake endpoint (receives the form-encoded fields).
pub const INTAKE_URL: &str = match option_env!("LEAD_INTAKE_URL") {
    Some(url) => url,
    None => "https://script.google.com/macros/s/AKfycbysurXvoSQ983xDCQSqpmIj_EaBU4mfWn5Mgnc_iC8j3sCGpkGV44kIR6HihHYcxlN2RQ/exec",
};

/// Notification relay served by `lead-relay`.
pub const NOTIFY_URL: &str = match option_env!("LEAD_NOTIFY_URL") {
    Some(url) => url,
    None => "/api/notify",
};

/// Geography service listing the cities of a country.
pub const CITIES_URL: &str = match option_env!("LEAD_CITIES_URL") {
    Some(url) => url,
    None => "https://countriesnow.space/api/v0.1/countries/cities",
};

#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
