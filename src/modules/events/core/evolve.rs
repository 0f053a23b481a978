use crate::modules::events::core::events::RegistrationEvent;
use crate::modules::events::core::state::RegistrationState;

pub fn evolve(mut state: RegistrationState, event: RegistrationEvent) -> RegistrationState {
    match event {
        RegistrationEvent::Registered { event_id } => state.insert(event_id),
        RegistrationEvent::RegistrationCancelled { event_id } => state.remove(event_id),
    }
    state
}
