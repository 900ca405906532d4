use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::adapters::clock::SubmissionClock;
use crate::adapters::notifier::Notifier;
use crate::adapters::submission_store::SubmissionStore;
use crate::runtime::contract::{
    response_headers, ContactFormFields, MessageBody, ResponseMessage, EMPTY_BODY,
};
use crate::runtime::error::{BackendError, SubmissionError};
use crate::runtime::notification::Notification;
use crate::runtime::submission::Submission;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Handles one API Gateway proxy event end to end. Every outcome, including
/// backend failures, is folded into a response; nothing is returned as `Err`.
pub fn handle_submission_event(
    event: Value,
    store: &dyn SubmissionStore,
    notifier: &dyn Notifier,
    clock: &dyn SubmissionClock,
) -> ApiGatewayResponse {
    match process_submission(&event, store, notifier, clock) {
        Ok(()) => message_response(ResponseMessage::Submitted),
        Err(failure) => {
            match &failure {
                SubmissionError::InvalidFormat { reason } => {
                    error!(event = "invalid_json", error = %reason, "Invalid JSON in request body");
                }
                SubmissionError::MissingFields => {}
                SubmissionError::UnexpectedPayload { .. } | SubmissionError::Backend(_) => {
                    error!(event = "submission_failed", error = %failure, "Error processing form");
                }
            }
            message_response(failure.response_message())
        }
    }
}

fn process_submission(
    event: &Value,
    store: &dyn SubmissionStore,
    notifier: &dyn Notifier,
    clock: &dyn SubmissionClock,
) -> Result<(), SubmissionError> {
    let body = request_body(event)?;
    let fields = ContactFormFields::parse(&body)?.validate()?;

    let submission = Submission::new(fields, &clock.now());
    store
        .put_submission(&submission)
        .map_err(BackendError::Storage)?;
    info!(
        event = "submission_saved",
        submission_id = %submission.submission_id,
        "Saved submission"
    );

    let receipt = notifier
        .publish(&Notification::for_submission(&submission))
        .map_err(BackendError::Notification)?;
    info!(event = "notification_published", receipt = ?receipt, "Published notification");

    Ok(())
}

/// Only an absent `body` key defaults to an empty object; a body that is not
/// text (including `null`) cannot be decoded.
fn request_body(event: &Value) -> Result<String, SubmissionError> {
    match event.get("body") {
        None => Ok(EMPTY_BODY.to_string()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(SubmissionError::UnexpectedPayload {
            reason: format!("request body must be a string, got {}", json_kind(other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn message_response(message: ResponseMessage) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: message.status_code(),
        headers: response_headers(),
        body: serde_json::to_string(&MessageBody::from(message))
            .expect("response payload should serialize"),
    }
}
