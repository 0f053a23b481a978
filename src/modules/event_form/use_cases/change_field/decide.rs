use std::str::FromStr;

use crate::modules::event_form::core::{
    decision::{DecideError, Decision},
    events::FormEvent,
    field::Field,
    state::FormState,
};
use crate::modules::event_form::use_cases::change_field::command::ChangeField;
use crate::modules::events::core::category::Category;

pub fn decide_change(_state: &FormState, command: ChangeField) -> Decision {
    let ChangeField { field, value } = command;
    let event = match field {
        Field::Category => match Category::from_str(&value) {
            Ok(category) => FormEvent::CategoryChanged { category },
            Err(_) => {
                return Decision::Rejected {
                    reason: DecideError::UnknownCategory(value),
                };
            }
        },
        field => FormEvent::FieldChanged { field, value },
    };
    Decision::Accepted {
        events: vec![event],
        intents: vec![],
    }
}
