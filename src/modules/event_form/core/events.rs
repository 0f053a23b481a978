use serde::Serialize;

use crate::modules::event_form::core::field::Field;
use crate::modules::event_form::core::state::SubmissionId;
use crate::modules::event_form::core::validation::{FieldErrors, NewEvent};
use crate::modules::events::core::category::Category;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum FormEvent {
    FieldChanged { field: Field, value: String },
    CategoryChanged { category: Category },
    ValidationFailed { errors: FieldErrors },
    EventSubmitted { submission: SubmissionId, event: NewEvent },
    FormReset,
}
