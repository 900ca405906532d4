use crate::runtime::notification::Notification;

/// What the notification backend reported back for one publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    pub message_id: Option<String>,
    pub sequence_number: Option<String>,
}

pub trait Notifier {
    fn publish(&self, notification: &Notification) -> Result<PublishReceipt, String>;
}
