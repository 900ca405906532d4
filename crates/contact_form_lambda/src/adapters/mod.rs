pub mod clock;
pub mod notifier;
pub mod submission_store;
