use thiserror::Error;

use crate::contract::ResponseMessage;

/// A failure of one of the two managed backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("failed to save submission: {0}")]
    Storage(String),
    #[error("failed to publish notification: {0}")]
    Notification(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("invalid JSON in request body: {reason}")]
    InvalidFormat { reason: String },
    #[error("missing required fields")]
    MissingFields,
    /// Body is not a string, or is JSON that is not an object.
    #[error("unexpected request payload: {reason}")]
    UnexpectedPayload { reason: String },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl SubmissionError {
    /// The message returned to the caller. Payload and backend causes map to
    /// a generic message and are only ever logged.
    pub fn response_message(&self) -> ResponseMessage {
        match self {
            Self::InvalidFormat { .. } => ResponseMessage::InvalidFormat,
            Self::MissingFields => ResponseMessage::MissingFields,
            Self::UnexpectedPayload { .. } | Self::Backend(_) => {
                ResponseMessage::ProcessingFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_hide_their_cause_from_the_response() {
        let error = SubmissionError::from(BackendError::Storage(
            "ResourceNotFoundException: table missing".to_string(),
        ));

        assert_eq!(error.response_message(), ResponseMessage::ProcessingFailed);
        assert_eq!(
            error.to_string(),
            "failed to save submission: ResourceNotFoundException: table missing"
        );
    }

    #[test]
    fn client_errors_map_to_bad_request_messages() {
        let invalid = SubmissionError::InvalidFormat {
            reason: "expected value".to_string(),
        };

        assert_eq!(invalid.response_message(), ResponseMessage::InvalidFormat);
        assert_eq!(
            SubmissionError::MissingFields.response_message(),
            ResponseMessage::MissingFields
        );
    }

    #[test]
    fn unexpected_payload_maps_to_generic_failure() {
        let error = SubmissionError::UnexpectedPayload {
            reason: "request body must be a JSON object".to_string(),
        };

        assert_eq!(error.response_message(), ResponseMessage::ProcessingFailed);
    }
}
