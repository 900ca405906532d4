use std::collections::HashMap;

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::types::AttributeValue;
use contact_form_lambda::adapters::clock::LocalClock;
use contact_form_lambda::adapters::notifier::{Notifier, PublishReceipt};
use contact_form_lambda::adapters::submission_store::SubmissionStore;
use contact_form_lambda::config::LambdaConfig;
use contact_form_lambda::handlers::submission::{handle_submission_event, ApiGatewayResponse};
use contact_form_lambda::runtime::notification::Notification;
use contact_form_lambda::runtime::submission::Submission;
use contact_form_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

struct DynamoDbSubmissionStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl SubmissionStore for DynamoDbSubmissionStore {
    fn put_submission(&self, submission: &Submission) -> Result<(), String> {
        let table_name = self.table_name.clone();
        let item = submission_item(submission);
        let client = self.dynamodb_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        format!(
                            "failed to put item into dynamodb: {}",
                            aws_sdk_dynamodb::error::DisplayErrorContext(&error)
                        )
                    })
            })
        })
    }
}

struct SnsNotifier {
    topic_arn: String,
    sns_client: aws_sdk_sns::Client,
}

impl Notifier for SnsNotifier {
    fn publish(&self, notification: &Notification) -> Result<PublishReceipt, String> {
        let topic_arn = self.topic_arn.clone();
        let subject = notification.subject.to_string();
        let message = notification.body.clone();
        let client = self.sns_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .publish()
                    .topic_arn(topic_arn)
                    .subject(subject)
                    .message(message)
                    .send()
                    .await
                    .map(|output| PublishReceipt {
                        message_id: output.message_id().map(str::to_string),
                        sequence_number: output.sequence_number().map(str::to_string),
                    })
                    .map_err(|error| {
                        format!(
                            "failed to publish to sns: {}",
                            aws_sdk_sns::error::DisplayErrorContext(&error)
                        )
                    })
            })
        })
    }
}

/// Backend handles built once per execution environment and shared by every
/// invocation it serves.
struct RuntimeDependencies {
    store: DynamoDbSubmissionStore,
    notifier: SnsNotifier,
}

impl RuntimeDependencies {
    async fn load(config: LambdaConfig) -> Self {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            store: DynamoDbSubmissionStore {
                table_name: config.submissions_table,
                dynamodb_client: aws_sdk_dynamodb::Client::new(&aws_config),
            },
            notifier: SnsNotifier {
                topic_arn: config.notification_topic_arn,
                sns_client: aws_sdk_sns::Client::new(&aws_config),
            },
        }
    }
}

fn submission_item(submission: &Submission) -> HashMap<String, AttributeValue> {
    submission
        .attributes()
        .into_iter()
        .map(|(name, value)| (name.to_string(), AttributeValue::S(value.to_string())))
        .collect()
}

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<ApiGatewayResponse, Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);
    let _entered = span.enter();

    Ok(handle_submission_event(
        event.payload,
        &deps.store,
        &deps.notifier,
        &LocalClock,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = LambdaConfig::from_env()?;
    info!(
        table = %config.submissions_table,
        topic_arn = %config.notification_topic_arn,
        "Loaded contact form configuration"
    );
    let deps = RuntimeDependencies::load(config).await;
    let deps = &deps;

    lambda_runtime::run(service_fn(move |event| handle_request(event, deps))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_submission() -> Submission {
        Submission {
            submission_id: "20240309-143005-a@example.com".to_string(),
            name: "Alice".to_string(),
            email: "a@example.com".to_string(),
            message: "Hi".to_string(),
            timestamp: "20240309-143005".to_string(),
        }
    }

    #[test]
    fn item_stores_every_attribute_as_string() {
        let item = submission_item(&sample_submission());

        assert_eq!(item.len(), 5);
        assert_eq!(
            item.get("submissionId"),
            Some(&AttributeValue::S("20240309-143005-a@example.com".to_string()))
        );
        assert_eq!(
            item.get("timestamp"),
            Some(&AttributeValue::S("20240309-143005".to_string()))
        );
        assert_eq!(item.get("name"), Some(&AttributeValue::S("Alice".to_string())));
    }

    #[test]
    fn item_keeps_message_text_verbatim() {
        let mut submission = sample_submission();
        submission.message = "first line\nsecond line".to_string();

        let item = submission_item(&submission);
        assert_eq!(
            item.get("message"),
            Some(&AttributeValue::S("first line\nsecond line".to_string()))
        );
    }
}
