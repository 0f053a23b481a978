use crate::modules::event_form::core::events::FormEvent;
use crate::modules::event_form::core::intents::FormIntent;
use crate::modules::event_form::core::state::SubmissionId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("scheduled reset for submission {0} is stale")]
    StaleReset(SubmissionId),
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        events: Vec<FormEvent>,
        intents: Vec<FormIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
