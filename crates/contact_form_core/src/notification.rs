use crate::submission::Submission;

pub const NOTIFICATION_SUBJECT: &str = "New Contact Form Submission";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: &'static str,
    pub body: String,
}

impl Notification {
    /// User text is embedded verbatim, including any newlines it carries.
    /// The leading newline and eight-space line indent are part of the text.
    pub fn for_submission(submission: &Submission) -> Self {
        Self {
            subject: NOTIFICATION_SUBJECT,
            body: format!(
                "\n        New contact form submission:\n\n        Name: {}\n        Email: {}\n        Message: {}\n        ",
                submission.name, submission.email, submission.message
            ),
        }
    }
}
