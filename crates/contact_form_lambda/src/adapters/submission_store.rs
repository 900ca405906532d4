use crate::runtime::submission::Submission;

pub trait SubmissionStore {
    /// Writes the record keyed by its submission id, replacing any existing one.
    fn put_submission(&self, submission: &Submission) -> Result<(), String>;
}
