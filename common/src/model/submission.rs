use serde::{Deserialize, Serialize};

/// Status of the current submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    /// Nothing submitted yet in this session.
    #[default]
    Idle,
    /// The mail handoff has been started and the pacing delay is running.
    Submitting,
    /// The handoff was started. This does not mean a mail was sent.
    Succeeded,
    /// Never entered today: the handoff cannot report failure back.
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        self == SubmissionState::Submitting
    }
}
