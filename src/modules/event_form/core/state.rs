use crate::modules::event_form::core::draft::EventDraft;
use crate::modules::event_form::core::validation::FieldErrors;

/// Sequence number of a successful submit. Ties a scheduled reset to the submit that scheduled it.
pub type SubmissionId = u64;

static NO_ERRORS: FieldErrors = FieldErrors::new();

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing {
        draft: EventDraft,
        errors: FieldErrors,
    },
    Submitted {
        draft: EventDraft,
        submission: SubmissionId,
    },
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing {
            draft: EventDraft::default(),
            errors: FieldErrors::new(),
        }
    }
}

impl FormState {
    pub fn draft(&self) -> &EventDraft {
        match self {
            FormState::Editing { draft, .. } | FormState::Submitted { draft, .. } => draft,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        match self {
            FormState::Editing { errors, .. } => errors,
            FormState::Submitted { .. } => &NO_ERRORS,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, FormState::Submitted { .. })
    }

    pub(crate) fn into_draft(self) -> EventDraft {
        match self {
            FormState::Editing { draft, .. } | FormState::Submitted { draft, .. } => draft,
        }
    }
}
