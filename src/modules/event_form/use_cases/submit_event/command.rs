use crate::modules::event_form::core::state::SubmissionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEvent {
    pub submission: SubmissionId,
}
