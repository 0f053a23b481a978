use crate::modules::event_form::core::state::SubmissionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetForm {
    /// The user pressed the reset button.
    Manual,
    /// The acknowledgement delay of a submit has elapsed.
    Scheduled { submission: SubmissionId },
}
