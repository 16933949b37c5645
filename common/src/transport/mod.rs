//! Seams to the three remote collaborators of the form.
//!
//! The browser crate implements these with `gloo-net`; tests use in-memory
//! fakes. Implementations run on a single-threaded executor, so the futures
//! are not required to be `Send`.
#![allow(async_fn_in_trait)]

use thiserror::Error;

use crate::location::{CitiesRequest, CitiesResponse};
use crate::submission::{NotifyRequest, SubmissionPayload};

/// Failure of a single network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// The lead intake endpoint.
pub trait IntakeTransport {
    /// Delivers the payload. `Ok` only means the request completed without a
    /// transport failure; the response itself may be opaque.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), TransportError>;
}

/// The follow-up notification endpoint. The response body is only logged.
pub trait NotificationTransport {
    async fn notify(&self, request: &NotifyRequest) -> Result<serde_json::Value, TransportError>;
}

/// The geography lookup service.
pub trait CityDirectory {
    async fn cities(&self, request: &CitiesRequest) -> Result<CitiesResponse, TransportError>;
}
