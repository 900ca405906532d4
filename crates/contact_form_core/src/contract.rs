use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SubmissionError;

pub const EMPTY_BODY: &str = "{}";

pub const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key",
    ),
    ("Access-Control-Allow-Methods", "POST,OPTIONS"),
];

pub fn response_headers() -> BTreeMap<String, String> {
    RESPONSE_HEADERS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Every message the handler can answer with, paired with its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMessage {
    Submitted,
    InvalidFormat,
    MissingFields,
    ProcessingFailed,
}

impl ResponseMessage {
    pub fn status_code(self) -> u16 {
        match self {
            Self::Submitted => 200,
            Self::InvalidFormat | Self::MissingFields => 400,
            Self::ProcessingFailed => 500,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Submitted => "Form submitted successfully!",
            Self::InvalidFormat => "Invalid JSON format",
            Self::MissingFields => "Missing required fields",
            Self::ProcessingFailed => "Error processing form",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl From<ResponseMessage> for MessageBody {
    fn from(value: ResponseMessage) -> Self {
        Self {
            message: value.text().to_string(),
        }
    }
}

/// Raw form fields as looked up in the request body. A field is `None` when
/// the key is absent, is not a string, or holds an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Form fields that passed validation; every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn parse(body: &str) -> Result<Self, SubmissionError> {
        let value: Value =
            serde_json::from_str(body).map_err(|error| SubmissionError::InvalidFormat {
                reason: error.to_string(),
            })?;

        let Value::Object(object) = value else {
            return Err(SubmissionError::UnexpectedPayload {
                reason: "request body must be a JSON object".to_string(),
            });
        };

        Ok(Self {
            name: text_field(&object, "name"),
            email: text_field(&object, "email"),
            message: text_field(&object, "message"),
        })
    }

    pub fn validate(self) -> Result<ValidatedFields, SubmissionError> {
        match (self.name, self.email, self.message) {
            (Some(name), Some(email), Some(message)) => Ok(ValidatedFields {
                name,
                email,
                message,
            }),
            _ => Err(SubmissionError::MissingFields),
        }
    }
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_all_three_fields() {
        let fields =
            ContactFormFields::parse(r#"{"name":"Alice","email":"a@example.com","message":"Hi"}"#)
                .expect("body should parse");

        assert_eq!(fields.name.as_deref(), Some("Alice"));
        assert_eq!(fields.email.as_deref(), Some("a@example.com"));
        assert_eq!(fields.message.as_deref(), Some("Hi"));
    }

    #[test]
    fn parse_treats_absent_and_empty_fields_as_missing() {
        let fields = ContactFormFields::parse(r#"{"name":"","message":null}"#)
            .expect("body should parse");

        assert_eq!(fields, ContactFormFields::default());
    }

    #[test]
    fn parse_ignores_unknown_keys() {
        let fields = ContactFormFields::parse(
            r#"{"name":"Bob","email":"b@example.com","message":"Yo","phone":"123"}"#,
        )
        .expect("body should parse");

        assert!(fields.validate().is_ok());
    }

    #[test]
    fn parse_rejects_non_json_text() {
        let error = ContactFormFields::parse("not json").expect_err("body should fail");
        assert!(matches!(error, SubmissionError::InvalidFormat { .. }));
    }

    #[test]
    fn parse_rejects_valid_json_that_is_not_an_object() {
        for body in [r#"["Alice"]"#, "42", "null", r#""text""#] {
            let error = ContactFormFields::parse(body).expect_err("body should fail");
            assert!(
                matches!(error, SubmissionError::UnexpectedPayload { .. }),
                "unexpected error for {body}: {error:?}"
            );
        }
    }

    #[test]
    fn validate_requires_every_field() {
        let fields = ContactFormFields {
            name: Some("Alice".to_string()),
            email: None,
            message: Some("Hi".to_string()),
        };

        let error = fields.validate().expect_err("validation should fail");
        assert!(matches!(error, SubmissionError::MissingFields));
    }

    #[test]
    fn non_string_values_do_not_satisfy_required_fields() {
        let fields =
            ContactFormFields::parse(r#"{"name":42,"email":"a@example.com","message":true}"#)
                .expect("body should parse");

        assert!(fields.validate().is_err());
    }

    #[test]
    fn response_messages_map_to_status_codes() {
        assert_eq!(ResponseMessage::Submitted.status_code(), 200);
        assert_eq!(ResponseMessage::InvalidFormat.status_code(), 400);
        assert_eq!(ResponseMessage::MissingFields.status_code(), 400);
        assert_eq!(ResponseMessage::ProcessingFailed.status_code(), 500);
    }

    #[test]
    fn response_headers_include_cors_set() {
        let headers = response_headers();

        assert_eq!(headers.len(), 4);
        assert_eq!(headers["Content-Type"], "application/json");
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            headers["Access-Control-Allow-Headers"],
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key"
        );
        assert_eq!(headers["Access-Control-Allow-Methods"], "POST,OPTIONS");
    }
}
