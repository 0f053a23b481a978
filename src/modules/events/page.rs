// Controller for the listing page.
//
// Owns the filters and the session's registration set. Decisions come from the
// pure decide/evolve core; this type only folds events and dispatches intents.

use serde::Serialize;

use crate::modules::events::core::catalog::seed_catalog;
use crate::modules::events::core::category::CategorySelection;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::evolve::evolve;
use crate::modules::events::core::intents::RegistrationIntent;
use crate::modules::events::core::state::RegistrationState;
use crate::modules::events::use_cases::list_events::query::EventQuery;
use crate::modules::events::use_cases::list_events::view::{EventsView, render_events_view};
use crate::modules::events::use_cases::toggle_registration::command::ToggleRegistration;
use crate::modules::events::use_cases::toggle_registration::decide::decide_toggle;
use crate::shared::core::primitives::EventId;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub event_id: EventId,
    pub registered: bool,
    pub message: &'static str,
}

#[derive(Debug, Clone)]
pub struct EventsPage {
    catalog: Vec<Event>,
    query: EventQuery,
    registrations: RegistrationState,
}

impl Default for EventsPage {
    fn default() -> Self {
        Self::new(seed_catalog())
    }
}

impl EventsPage {
    pub fn new(catalog: Vec<Event>) -> Self {
        Self {
            catalog,
            query: EventQuery::default(),
            registrations: RegistrationState::new(),
        }
    }

    pub fn catalog(&self) -> &[Event] {
        &self.catalog
    }

    pub fn query(&self) -> &EventQuery {
        &self.query
    }

    pub fn registrations(&self) -> &RegistrationState {
        &self.registrations
    }

    pub fn select_category(&mut self, category: CategorySelection) {
        self.query.category = category;
    }

    pub fn search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn view(&self) -> EventsView {
        render_events_view(&self.catalog, &self.query, &self.registrations)
    }

    pub fn toggle_registration(&mut self, command: ToggleRegistration) -> ToggleOutcome {
        let decision = decide_toggle(&self.registrations, command);
        let state = std::mem::take(&mut self.registrations);
        self.registrations = decision.events.into_iter().fold(state, evolve);

        let mut message = None;
        for intent in decision.intents {
            match intent {
                RegistrationIntent::Acknowledge { acknowledgement } => {
                    tracing::info!(
                        event_id = command.event_id,
                        acknowledgement = acknowledgement.message(),
                        "registration toggled"
                    );
                    message = Some(acknowledgement.message());
                }
            }
        }

        ToggleOutcome {
            event_id: command.event_id,
            registered: self.registrations.is_registered(command.event_id),
            message: message.unwrap_or_default(),
        }
    }
}
