use serde::Serialize;

use crate::modules::event_form::core::draft::EventDraft;
use crate::modules::event_form::core::state::FormState;
use crate::modules::event_form::core::validation::FieldErrors;
use crate::modules::events::core::category::Category;

pub const SUCCESS_TITLE: &str = "Event Created Successfully!";
pub const SUCCESS_BODY: &str = "Your event has been created and is now live.";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SuccessMessage {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormView {
    pub phase: FormPhase,
    pub draft: EventDraft,
    pub errors: FieldErrors,
    pub success: Option<SuccessMessage>,
    pub categories: Vec<Category>,
}

impl FormView {
    pub fn render(state: &FormState) -> Self {
        let (phase, success) = if state.is_submitted() {
            (
                FormPhase::Submitted,
                Some(SuccessMessage {
                    title: SUCCESS_TITLE,
                    body: SUCCESS_BODY,
                }),
            )
        } else {
            (FormPhase::Editing, None)
        };
        Self {
            phase,
            draft: state.draft().clone(),
            errors: state.errors().clone(),
            success,
            categories: Category::all(),
        }
    }
}
