use crate::modules::event_form::core::{
    decision::Decision,
    events::FormEvent,
    intents::FormIntent,
    state::FormState,
    validation::validate,
};
use crate::modules::event_form::use_cases::submit_event::command::SubmitEvent;

/// Validate the whole draft. A failed submit is still accepted: it records the errors.
pub fn decide_submit(state: &FormState, command: SubmitEvent) -> Decision {
    let SubmitEvent { submission } = command;
    match validate(state.draft()) {
        Ok(event) => Decision::Accepted {
            events: vec![FormEvent::EventSubmitted {
                submission,
                event: event.clone(),
            }],
            intents: vec![
                FormIntent::LogCreatedEvent { event },
                FormIntent::ScheduleReset { submission },
            ],
        },
        Err(errors) => Decision::Accepted {
            events: vec![FormEvent::ValidationFailed { errors }],
            intents: if state.is_submitted() {
                vec![FormIntent::CancelScheduledReset]
            } else {
                vec![]
            },
        },
    }
}
