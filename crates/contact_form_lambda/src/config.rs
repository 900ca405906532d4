use thiserror::Error;

pub const SUBMISSIONS_TABLE_ENV: &str = "SUBMISSIONS_TABLE";
pub const NOTIFICATION_TOPIC_ARN_ENV: &str = "NOTIFICATION_TOPIC_ARN";

pub const DEFAULT_SUBMISSIONS_TABLE: &str = "ContactFormSubmission";
pub const DEFAULT_NOTIFICATION_TOPIC_ARN: &str =
    "arn:aws:sns:us-east-1:038462762530:ContactFormTopic";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} is set but empty")]
    Blank { name: &'static str },
}

/// Deployment-specific backend destinations, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub submissions_table: String,
    pub notification_topic_arn: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            submissions_table: setting(&lookup, SUBMISSIONS_TABLE_ENV, DEFAULT_SUBMISSIONS_TABLE)?,
            notification_topic_arn: setting(
                &lookup,
                NOTIFICATION_TOPIC_ARN_ENV,
                DEFAULT_NOTIFICATION_TOPIC_ARN,
            )?,
        })
    }
}

fn setting(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::Blank { name }),
        Some(value) => Ok(value.trim().to_string()),
    }
}
