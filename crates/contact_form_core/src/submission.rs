use chrono::NaiveDateTime;

use crate::contract::ValidatedFields;

pub const SUBMISSION_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// A validated contact form post, ready to be written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub submission_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl Submission {
    pub fn new(fields: ValidatedFields, received_at: &NaiveDateTime) -> Self {
        let timestamp = submission_timestamp(received_at);
        Self {
            submission_id: submission_id(&timestamp, &fields.email),
            name: fields.name,
            email: fields.email,
            message: fields.message,
            timestamp,
        }
    }

    /// Stored attribute names paired with their values, key attribute first.
    pub fn attributes(&self) -> [(&'static str, &str); 5] {
        [
            ("submissionId", self.submission_id.as_str()),
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
            ("timestamp", self.timestamp.as_str()),
        ]
    }
}

pub fn submission_timestamp(received_at: &NaiveDateTime) -> String {
    received_at.format(SUBMISSION_TIMESTAMP_FORMAT).to_string()
}

/// Not collision-proof: the same email within the same second yields the
/// same id, and the later write replaces the earlier record.
pub fn submission_id(timestamp: &str, email: &str) -> String {
    format!("{timestamp}-{email}")
}
