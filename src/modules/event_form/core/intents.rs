use crate::modules::event_form::core::state::SubmissionId;
use crate::modules::event_form::core::validation::NewEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    LogCreatedEvent { event: NewEvent },
    ScheduleReset { submission: SubmissionId },
    CancelScheduledReset,
}
