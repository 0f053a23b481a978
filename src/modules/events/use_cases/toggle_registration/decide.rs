use crate::modules::events::core::{
    events::RegistrationEvent,
    intents::{Acknowledgement, RegistrationIntent},
    state::RegistrationState,
};
use crate::modules::events::use_cases::toggle_registration::{
    command::ToggleRegistration, decision::Decision,
};

pub fn decide_toggle(state: &RegistrationState, command: ToggleRegistration) -> Decision {
    let ToggleRegistration { event_id } = command;
    let (event, acknowledgement) = if state.is_registered(event_id) {
        (
            RegistrationEvent::RegistrationCancelled { event_id },
            Acknowledgement::Cancelled,
        )
    } else {
        (
            RegistrationEvent::Registered { event_id },
            Acknowledgement::Registered,
        )
    };
    Decision {
        events: vec![event],
        intents: vec![RegistrationIntent::Acknowledge { acknowledgement }],
    }
}
