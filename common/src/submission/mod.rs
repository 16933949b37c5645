//! Submission: the payload sent to the intake endpoint, the follow-up
//! notification, and the orchestrator that sequences them.

mod notification;
mod orchestrator;
mod payload;

pub use notification::{
    DEFAULT_LANGUAGE_CODE, DEFAULT_TEMPLATE_NAME, MessageTemplate, NotificationRequest,
    NotifyRequest, TemplateLanguage, digits_only,
};
pub use orchestrator::{
    SubmissionOrchestrator, SubmitNotice, SubmitOutcome, SubmitPhase, SubmitReport, SubmitStart,
    notify_best_effort,
};
pub use payload::SubmissionPayload;
