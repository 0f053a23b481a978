use serde::Deserialize;

use crate::shared::core::primitives::EventId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ToggleRegistration {
    pub event_id: EventId,
}
