use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::EventId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RegistrationEvent {
    Registered { event_id: EventId },
    RegistrationCancelled { event_id: EventId },
}
