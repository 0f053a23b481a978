use serde::Serialize;

use crate::modules::event_form::core::field::Field;
use crate::modules::events::core::category::Category;

/// In-progress form input. Everything except the category is kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub price: String,
    pub attendees: String,
    pub description: String,
}

impl EventDraft {
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Date => self.date.clone(),
            Field::Time => self.time.clone(),
            Field::Location => self.location.clone(),
            Field::Category => self.category.to_string(),
            Field::Price => self.price.clone(),
            Field::Attendees => self.attendees.clone(),
            Field::Description => self.description.clone(),
        }
    }

    /// Overwrite a text field. The category is typed and goes through `category` instead.
    pub(crate) fn set_text(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Location => &mut self.location,
            Field::Price => &mut self.price,
            Field::Attendees => &mut self.attendees,
            Field::Description => &mut self.description,
            Field::Category => return,
        };
        *slot = value;
    }
}
