// Shared test fixture for form drafts.
// The canonical draft is read from json/event_draft.json; setters override single fields.

use serde::Deserialize;
use std::fs;
use strum::IntoEnumIterator;

use crate::modules::event_form::core::draft::EventDraft;
use crate::modules::event_form::core::field::Field;
use crate::modules::event_form::handler::EventFormHandler;
use crate::modules::event_form::use_cases::change_field::command::ChangeField;
use crate::modules::events::core::category::Category;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct EventDraftDto {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub price: String,
    pub attendees: String,
    pub description: String,
}

pub struct EventDraftBuilder {
    inner: EventDraft,
}

impl Default for EventDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventDraftBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/event_draft.json").unwrap();
        let dto: EventDraftDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: EventDraft {
                title: dto.title,
                date: dto.date,
                time: dto.time,
                location: dto.location,
                category: dto.category,
                price: dto.price,
                attendees: dto.attendees,
                description: dto.description,
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn category(mut self, v: Category) -> Self {
        self.inner.category = v;
        self
    }

    pub fn price(mut self, v: impl Into<String>) -> Self {
        self.inner.price = v.into();
        self
    }

    pub fn attendees(mut self, v: impl Into<String>) -> Self {
        self.inner.attendees = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> EventDraft {
        self.inner
    }
}

/// Type every field of `draft` into the handler's form, one change per field.
pub async fn fill(handler: &EventFormHandler, draft: EventDraft) {
    for field in Field::iter() {
        handler
            .change_field(ChangeField::new(field, draft.value(field)))
            .await
            .unwrap_or_else(|e| panic!("failed to fill {field}: {e}"));
    }
}

#[cfg(test)]
mod event_draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventDraftBuilder::default().build();
        assert_eq!(built.title, "Rust Meetup");
        assert_eq!(built.date, "2025-01-01");
        assert_eq!(built.time, "10:00");
        assert_eq!(built.location, "X");
        assert_eq!(built.category, Category::Conference);
        assert_eq!(built.price, "10");
        assert_eq!(built.attendees, "5");
        assert_eq!(built.description, "Y");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = EventDraftBuilder::new()
            .title("t")
            .date("d")
            .time("h")
            .location("l")
            .category(Category::Social)
            .price("p")
            .attendees("a")
            .description("desc")
            .build();

        assert_eq!(custom.title, "t");
        assert_eq!(custom.date, "d");
        assert_eq!(custom.time, "h");
        assert_eq!(custom.location, "l");
        assert_eq!(custom.category, Category::Social);
        assert_eq!(custom.price, "p");
        assert_eq!(custom.attendees, "a");
        assert_eq!(custom.description, "desc");
    }
}
