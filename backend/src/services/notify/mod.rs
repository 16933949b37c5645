//! # Notification Relay Service
//!
//! Routes under `/api/notify`. The browser only names the recipient; the
//! relay builds the template message and attaches the bearer credential, so
//! the credential never ships in the frontend bundle.

mod forward;

pub use forward::NotifyRelay;

use crate::services::notify::forward::process;
use actix_web::web;

const API_PATH: &str = "/api/notify";

/// Configures and returns the Actix `Scope` for the notification relay.
///
/// # Registered Routes:
///
/// *   **`POST /`**:
///     - **Handler**: `forward::process`
///     - **Description**: Accepts `{"to": "<digits>"}`, forwards a template
///       message to the messaging API and answers with the upstream status
///       and JSON body. Answers `400` for a malformed recipient and `502`
///       when the messaging API cannot be reached.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH).route("", web::post().to(process))
}
