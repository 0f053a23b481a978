use serde::Deserialize;

use crate::modules::event_form::core::field::Field;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangeField {
    pub field: Field,
    pub value: String,
}

impl ChangeField {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
