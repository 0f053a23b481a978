use serde::Serialize;

use crate::modules::events::core::category::{Category, CategorySelection};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::state::RegistrationState;
use crate::modules::events::use_cases::list_events::filter::filter_events;
use crate::modules::events::use_cases::list_events::query::EventQuery;
use crate::shared::core::primitives::EventId;

pub const NO_EVENTS_MESSAGE: &str = "No events found matching your criteria.";

/// Selections offered by the listing page's filter bar.
pub const FILTER_BAR: [CategorySelection; 5] = [
    CategorySelection::All,
    CategorySelection::Only(Category::Conference),
    CategorySelection::Only(Category::Workshop),
    CategorySelection::Only(Category::Festival),
    CategorySelection::Only(Category::Networking),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryButton {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventCard {
    pub id: EventId,
    pub image_emoji: String,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub attendees: String,
    pub price: String,
    pub registered: bool,
    pub action: &'static str,
}

impl EventCard {
    fn render(event: &Event, registered: bool) -> Self {
        Self {
            id: event.id,
            image_emoji: event.image_emoji.clone(),
            category: event.category,
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.display_date(),
            time: event.time.clone(),
            location: event.location.clone(),
            attendees: event.display_attendees(),
            price: event.display_price(),
            registered,
            action: if registered { "Cancel" } else { "Register" },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventsView {
    pub categories: Vec<CategoryButton>,
    pub selected_category: String,
    pub search: String,
    pub count: usize,
    pub stats: String,
    pub events: Vec<EventCard>,
    pub empty_message: Option<&'static str>,
    pub registered: Vec<EventId>,
}

pub fn stats_line(count: usize) -> String {
    let noun = if count == 1 { "event" } else { "events" };
    format!("Showing {count} {noun}")
}

pub fn render_events_view(
    catalog: &[Event],
    query: &EventQuery,
    registrations: &RegistrationState,
) -> EventsView {
    let events: Vec<EventCard> = filter_events(catalog, query)
        .into_iter()
        .map(|event| EventCard::render(event, registrations.is_registered(event.id)))
        .collect();
    let count = events.len();

    EventsView {
        categories: FILTER_BAR
            .iter()
            .map(|selection| CategoryButton {
                label: selection.to_string(),
                active: *selection == query.category,
            })
            .collect(),
        selected_category: query.category.to_string(),
        search: query.search.clone(),
        count,
        stats: stats_line(count),
        empty_message: events.is_empty().then_some(NO_EVENTS_MESSAGE),
        events,
        registered: registrations.registered().collect(),
    }
}
