use reqwest::Client;
use shared::{domain::Field, protocol::CreateEmployeeRequest};
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod validation;

pub use validation::{validate, ValidationErrors};

/// Fixed endpoint the create-record request goes to unless the controller
/// is constructed with an override.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/employees";

/// Status text shown after the endpoint accepts a record.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Employee added successfully.";

/// Status text shown when no response could be obtained at all.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

/// The in-progress employee record, exactly as typed.
///
/// Values stay raw strings until submission; validation interprets them but
/// never rewrites them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub date_of_joining: String,
    pub role: String,
}

impl EmployeeDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::EmployeeId => &self.employee_id,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Department => &self.department,
            Field::DateOfJoining => &self.date_of_joining,
            Field::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::EmployeeId => self.employee_id = value,
            Field::Email => self.email = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Department => self.department = value,
            Field::DateOfJoining => self.date_of_joining = value,
            Field::Role => self.role = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn to_request(&self) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            name: self.name.clone(),
            employee_id: self.employee_id.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            department: self.department.clone(),
            date_of_joining: self.date_of_joining.clone(),
            role: self.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

/// The single user-visible outcome text for the latest submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Failure,
            text: text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("employee endpoint rejected the record ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("employee endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result of one submit attempt. Terminal either way: the user corrects the
/// record or retries manually; the controller never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was issued.
    Invalid(ValidationErrors),
    /// The endpoint accepted the record and the form was cleared.
    Accepted,
    /// The endpoint answered with a non-success status; `message` is the
    /// response body, verbatim.
    Rejected { message: String },
    /// No response could be obtained.
    TransportFailed,
}

/// Owns the employee record, validates it, and drives submission.
pub struct FormController {
    http: Client,
    endpoint: String,
    record: EmployeeDraft,
    errors: ValidationErrors,
    status: Option<StatusMessage>,
}

impl FormController {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            record: EmployeeDraft::default(),
            errors: ValidationErrors::default(),
            status: None,
        }
    }

    pub fn record(&self) -> &EmployeeDraft {
        &self.record
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Sets one field, leaving the others untouched.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
    }

    /// Runs every field rule and stores the accumulated errors. Returns
    /// `true` iff the record is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validation::validate(&self.record);
        self.errors.is_empty()
    }

    /// Validates and, if the record is clean, issues the create-record
    /// request. Exactly one request per invocation; an invalid record
    /// leaves the status message untouched.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.validate() {
            debug!(
                invalid_fields = self.errors.len(),
                "record failed validation; submit skipped"
            );
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        match self.post_record().await {
            Ok(()) => {
                info!("employee record accepted");
                self.status = Some(StatusMessage::success(SUBMIT_SUCCESS_MESSAGE));
                self.record.clear();
                SubmitOutcome::Accepted
            }
            Err(SubmitError::Rejected { status, body }) => {
                warn!(%status, "employee record rejected by endpoint");
                self.status = Some(StatusMessage::failure(body.clone()));
                SubmitOutcome::Rejected { message: body }
            }
            Err(SubmitError::Transport(err)) => {
                warn!("employee submission failed in transport: {err}");
                self.status = Some(StatusMessage::failure(TRANSPORT_FAILURE_MESSAGE));
                SubmitOutcome::TransportFailed
            }
        }
    }

    async fn post_record(&self) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.record.to_request())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Rejected { status, body })
    }

    /// Clears the record, the validation errors, and the status message.
    pub fn reset(&mut self) {
        self.record.clear();
        self.errors.clear();
        self.status = None;
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests;
