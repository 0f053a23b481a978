use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::events::core::category::Category;
use crate::shared::core::primitives::EventId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub attendees: u32,
    pub price: f64,
    pub description: String,
    pub image_emoji: String,
}

impl Event {
    /// Long-form date as shown on event cards, e.g. `December 15, 2025`.
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }

    pub fn display_attendees(&self) -> String {
        format!("{} attendees", self.attendees)
    }
}
