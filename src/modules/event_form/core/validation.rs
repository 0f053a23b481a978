// Validation rules of the creation form.
//
// Every rule runs on every call; the result maps each failing field to its message.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::modules::event_form::core::draft::EventDraft;
use crate::modules::event_form::core::field::Field;
use crate::modules::events::core::category::Category;

pub const TITLE_REQUIRED: &str = "Event title is required";
pub const DATE_REQUIRED: &str = "Event date is required";
pub const TIME_REQUIRED: &str = "Event time is required";
pub const LOCATION_REQUIRED: &str = "Location is required";
pub const PRICE_INVALID: &str = "Valid price is required";
pub const ATTENDEES_INVALID: &str = "Expected attendees must be at least 1";
pub const DESCRIPTION_REQUIRED: &str = "Event description is required";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub(crate) fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub(crate) fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

/// A draft that passed validation, with its numeric fields parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub price: f64,
    pub attendees: u32,
    pub description: String,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

fn parse_attendees(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|count| *count >= 1)
}

pub fn validate(draft: &EventDraft) -> Result<NewEvent, FieldErrors> {
    let mut errors = FieldErrors::new();

    if is_blank(&draft.title) {
        errors.insert(Field::Title, TITLE_REQUIRED);
    }
    if is_blank(&draft.date) {
        errors.insert(Field::Date, DATE_REQUIRED);
    }
    if is_blank(&draft.time) {
        errors.insert(Field::Time, TIME_REQUIRED);
    }
    if is_blank(&draft.location) {
        errors.insert(Field::Location, LOCATION_REQUIRED);
    }
    let price = parse_price(&draft.price);
    if price.is_none() {
        errors.insert(Field::Price, PRICE_INVALID);
    }
    let attendees = parse_attendees(&draft.attendees);
    if attendees.is_none() {
        errors.insert(Field::Attendees, ATTENDEES_INVALID);
    }
    if is_blank(&draft.description) {
        errors.insert(Field::Description, DESCRIPTION_REQUIRED);
    }

    match (price, attendees) {
        (Some(price), Some(attendees)) if errors.is_empty() => Ok(NewEvent {
            title: draft.title.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            location: draft.location.clone(),
            category: draft.category,
            price,
            attendees,
            description: draft.description.clone(),
        }),
        _ => Err(errors),
    }
}
