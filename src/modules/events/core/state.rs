use std::collections::BTreeSet;

use crate::shared::core::primitives::EventId;

/// Event ids the current session has registered for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationState {
    registered: BTreeSet<EventId>,
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, event_id: EventId) -> bool {
        self.registered.contains(&event_id)
    }

    pub fn registered(&self) -> impl Iterator<Item = EventId> + '_ {
        self.registered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    pub(crate) fn insert(&mut self, event_id: EventId) {
        self.registered.insert(event_id);
    }

    pub(crate) fn remove(&mut self, event_id: EventId) {
        self.registered.remove(&event_id);
    }
}

impl FromIterator<EventId> for RegistrationState {
    fn from_iter<T: IntoIterator<Item = EventId>>(iter: T) -> Self {
        Self {
            registered: iter.into_iter().collect(),
        }
    }
}
