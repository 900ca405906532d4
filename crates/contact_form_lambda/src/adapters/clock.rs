use chrono::{Local, NaiveDateTime};

pub trait SubmissionClock {
    /// Current wall-clock time in the process's configured time zone.
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl SubmissionClock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
