/// Where a contact form is in its submit cycle.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// Carries the message shown to the visitor.
    Failed(String),
}

impl SubmissionStatus {
    /// Whether the submit control is enabled.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed(_))
    }
}
