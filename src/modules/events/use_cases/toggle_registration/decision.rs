use crate::modules::events::core::events::RegistrationEvent;
use crate::modules::events::core::intents::RegistrationIntent;

/// A toggle is never rejected: every id flips between registered and cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub events: Vec<RegistrationEvent>,
    pub intents: Vec<RegistrationIntent>,
}
