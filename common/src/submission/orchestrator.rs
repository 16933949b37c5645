//! Submit lifecycle.
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!                    -> Submitting -> Failed -> Idle            (input kept)
//!                                  -> Succeeded -> notify -> Idle (new instance)
//! ```
//!
//! The orchestrator is split into synchronous transitions so a UI that cannot
//! hold the form state across an `.await` (an Elm-style update loop) can drive
//! it from messages: `begin` on submit, the intake call in a spawned task,
//! then `intake_resolved` when the task reports back.

use log::{error, info, warn};

use super::notification::NotifyRequest;
use super::payload::SubmissionPayload;
use crate::form::FormState;
use crate::transport::{IntakeTransport, NotificationTransport, TransportError};
use crate::validation::PhoneValidity;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    /// The intake request for this payload is in flight.
    Submitting(SubmissionPayload),
}

/// Result of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation failed; every field is now touched and shows its error.
    Invalid,
    /// A previous submission has not resolved yet; nothing was done.
    Busy,
    /// Send this payload to the intake endpoint.
    Submit(SubmissionPayload),
}

/// Result of the intake request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form kept its values so the user can retry.
    Failed(TransportError),
    /// The form was reset; fire `notify` without waiting for it.
    Succeeded { notify: NotifyRequest },
}

/// How a complete `SubmissionOrchestrator::submit` run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    Invalid,
    Busy,
    Failed(TransportError),
    /// The form was reset and the notification for this recipient was attempted.
    Succeeded(NotifyRequest),
}

/// User-facing notices shown while a submission runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitNotice {
    Pending,
    Success,
    Error,
}

impl SubmitNotice {
    pub fn message(self) -> &'static str {
        match self {
            SubmitNotice::Pending => "Submitting your form...",
            SubmitNotice::Success => "Thank you! Your form has been submitted successfully.",
            SubmitNotice::Error => "There was an error submitting your form. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionOrchestrator {
    phase: SubmitPhase,
}

impl SubmissionOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting(_))
    }

    /// Handles a submit press: validates the whole form and, if it passes,
    /// snapshots the payload and moves to `Submitting`.
    pub fn begin(&mut self, state: &mut FormState, phone: Option<&dyn PhoneValidity>) -> SubmitStart {
        if self.is_submitting() {
            warn!("submit ignored, previous submission still in flight");
            return SubmitStart::Busy;
        }

        self.phase = SubmitPhase::Validating;
        if !state.validate_all(phone) {
            self.phase = SubmitPhase::Idle;
            return SubmitStart::Invalid;
        }

        let payload = SubmissionPayload::from_values(state.values());
        self.phase = SubmitPhase::Submitting(payload.clone());
        SubmitStart::Submit(payload)
    }

    /// Handles the end of the intake request.
    ///
    /// On success the form is reset (new instance id) and the notification
    /// request for the submitted phone is returned. On failure the form is
    /// left as is. Returns `None` when no submission was in flight.
    pub fn intake_resolved(
        &mut self,
        state: &mut FormState,
        result: Result<(), TransportError>,
    ) -> Option<SubmitOutcome> {
        let SubmitPhase::Submitting(payload) = std::mem::take(&mut self.phase) else {
            warn!("intake result received with no submission in flight");
            return None;
        };
        Some(Self::resolve(state, &payload, result))
    }

    /// Runs a whole submission: validation, the intake call, and on success
    /// the reset followed by the best-effort notification.
    ///
    /// For callers that can hold the form state across the awaits; a
    /// message-driven UI uses `begin` and `intake_resolved` instead.
    pub async fn submit<I, N>(
        &mut self,
        state: &mut FormState,
        phone: Option<&dyn PhoneValidity>,
        intake: &I,
        notifier: &N,
    ) -> SubmitReport
    where
        I: IntakeTransport,
        N: NotificationTransport,
    {
        let payload = match self.begin(state, phone) {
            SubmitStart::Invalid => return SubmitReport::Invalid,
            SubmitStart::Busy => return SubmitReport::Busy,
            SubmitStart::Submit(payload) => payload,
        };

        let result = intake.submit(&payload).await;
        self.phase = SubmitPhase::Idle;
        match Self::resolve(state, &payload, result) {
            SubmitOutcome::Succeeded { notify } => {
                notify_best_effort(notifier, &notify).await;
                SubmitReport::Succeeded(notify)
            }
            SubmitOutcome::Failed(err) => SubmitReport::Failed(err),
        }
    }

    fn resolve(
        state: &mut FormState,
        payload: &SubmissionPayload,
        result: Result<(), TransportError>,
    ) -> SubmitOutcome {
        match result {
            Ok(()) => {
                let notify = NotifyRequest::for_phone(&payload.phone);
                state.reset();
                SubmitOutcome::Succeeded { notify }
            }
            Err(err) => {
                error!("form submission failed: {err}");
                SubmitOutcome::Failed(err)
            }
        }
    }
}

/// Sends the follow-up notification once. The outcome is only logged.
pub async fn notify_best_effort<N: NotificationTransport>(transport: &N, request: &NotifyRequest) {
    match transport.notify(request).await {
        Ok(response) => info!("notification sent: {response}"),
        Err(err) => error!("error sending notification: {err}"),
    }
}
