//! Events flowing from the backend worker to the form screen.

use form_core::ValidationErrors;

pub enum UiEvent {
    WorkerReady,
    WorkerFailed(String),
    /// Validation blocked the submit; the record and status stay as they
    /// were, only the inline errors change.
    FormRejected(ValidationErrors),
    SubmitAccepted { message: String },
    /// The endpoint refused the record; `message` is its response body.
    SubmitRejected { message: String },
    SubmitFailed { message: String },
}
