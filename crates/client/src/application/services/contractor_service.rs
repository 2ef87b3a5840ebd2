//! Contractor Service - sends a finished contractor draft to the backend
//!
//! One submit attempt produces at most one POST. There is no retry: every
//! outcome is final and reported to the user, who resubmits by hand.

use contractor_domain::{ContractorSubmission, SubmitBlocked, ValidationReport};

use crate::application::api::Api;
use crate::application::error::ServiceError;
use crate::ports::outbound::ApiError;

/// Alert shown after the backend accepted the data
pub const SUCCESS_MESSAGE: &str = "Data sent";

/// Alert shown for every failed POST, whatever the cause
pub const FAILURE_MESSAGE: &str = "Could not send data. Please try again.";

/// Result of one press of the Submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Inline field errors; nothing was sent
    Invalid(ValidationReport),
    /// Fields are valid but no photo was chosen; nothing was sent
    MissingImage,
    /// The backend answered with a success status
    Sent,
    /// The POST failed (transport, status, or encoding)
    Failed(ServiceError),
}

impl SubmitOutcome {
    /// Text for the blocking alert, or `None` when errors are shown inline
    pub fn alert_message(&self) -> Option<String> {
        match self {
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::MissingImage => Some(SubmitBlocked::MissingImage.to_string()),
            SubmitOutcome::Sent => Some(SUCCESS_MESSAGE.to_string()),
            SubmitOutcome::Failed(_) => Some(FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

impl From<SubmitBlocked> for SubmitOutcome {
    fn from(blocked: SubmitBlocked) -> Self {
        match blocked {
            SubmitBlocked::Invalid(report) => SubmitOutcome::Invalid(report),
            SubmitBlocked::MissingImage => SubmitOutcome::MissingImage,
        }
    }
}

/// Contractor service for saving contractor data
#[derive(Clone)]
pub struct ContractorService {
    api: Api,
    submit_url: String,
}

impl ContractorService {
    /// Create a new ContractorService posting to `submit_url`
    pub fn new(api: Api, submit_url: impl Into<String>) -> Self {
        Self {
            api,
            submit_url: submit_url.into(),
        }
    }

    /// POST the submission; the response body is discarded
    pub async fn save(&self, submission: &ContractorSubmission) -> Result<(), ServiceError> {
        tracing::debug!(
            url = %self.submit_url,
            entity_type = submission.entity_type.wire_value(),
            "Sending contractor"
        );
        self.api
            .post_no_response(&self.submit_url, submission)
            .await
            .map_err(|e| match e {
                ApiError::SerializeError(msg) => ServiceError::Serialize(msg),
                other => ServiceError::Api(other),
            })
    }

    /// Finish a submit attempt started by `ContractorForm::submit`.
    ///
    /// Blocked attempts return without touching the network.
    pub async fn submit(
        &self,
        attempt: Result<ContractorSubmission, SubmitBlocked>,
    ) -> SubmitOutcome {
        let submission = match attempt {
            Ok(submission) => submission,
            Err(blocked) => {
                tracing::debug!(reason = %blocked, "Submit blocked");
                return blocked.into();
            }
        };

        match self.save(&submission).await {
            Ok(()) => {
                tracing::info!("Contractor data sent");
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, transport = e.is_transport(), "Contractor submit failed");
                SubmitOutcome::Failed(e)
            }
        }
    }
}
