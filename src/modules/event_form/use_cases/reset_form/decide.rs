use crate::modules::event_form::core::{
    decision::{DecideError, Decision},
    events::FormEvent,
    intents::FormIntent,
    state::FormState,
};
use crate::modules::event_form::use_cases::reset_form::command::ResetForm;

pub fn decide_reset(state: &FormState, command: ResetForm) -> Decision {
    match (state, command) {
        (_, ResetForm::Manual) => Decision::Accepted {
            events: vec![FormEvent::FormReset],
            intents: vec![FormIntent::CancelScheduledReset],
        },
        (FormState::Submitted { submission, .. }, ResetForm::Scheduled { submission: due })
            if *submission == due =>
        {
            Decision::Accepted {
                events: vec![FormEvent::FormReset],
                intents: vec![],
            }
        }
        (_, ResetForm::Scheduled { submission }) => Decision::Rejected {
            reason: DecideError::StaleReset(submission),
        },
    }
}
