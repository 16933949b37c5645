//! Form core shared by the lead-capture frontend and the notification relay.
//!
//! Everything in this crate is target independent: the browser crate binds it
//! to the DOM and to `gloo-net`, the relay crate reuses the notification
//! payload types, and the unit tests run natively.

pub mod form;
pub mod location;
pub mod model;
pub mod submission;
pub mod transport;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
