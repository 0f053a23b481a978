use crate::modules::event_form::core::events::FormEvent;
use crate::modules::event_form::core::field::Field;
use crate::modules::event_form::core::state::FormState;
use crate::modules::event_form::core::validation::FieldErrors;

pub fn evolve(state: FormState, event: FormEvent) -> FormState {
    match (state, event) {
        (FormState::Editing { mut draft, mut errors }, FormEvent::FieldChanged { field, value }) => {
            draft.set_text(field, value);
            errors.clear(field);
            FormState::Editing { draft, errors }
        }
        (FormState::Editing { mut draft, mut errors }, FormEvent::CategoryChanged { category }) => {
            draft.category = category;
            errors.clear(Field::Category);
            FormState::Editing { draft, errors }
        }
        (
            FormState::Submitted {
                mut draft,
                submission,
            },
            FormEvent::FieldChanged { field, value },
        ) => {
            draft.set_text(field, value);
            FormState::Submitted { draft, submission }
        }
        (
            FormState::Submitted {
                mut draft,
                submission,
            },
            FormEvent::CategoryChanged { category },
        ) => {
            draft.category = category;
            FormState::Submitted { draft, submission }
        }
        (state, FormEvent::ValidationFailed { errors }) => FormState::Editing {
            draft: state.into_draft(),
            errors,
        },
        (state, FormEvent::EventSubmitted { submission, .. }) => FormState::Submitted {
            draft: state.into_draft(),
            submission,
        },
        (_, FormEvent::FormReset) => FormState::Editing {
            draft: Default::default(),
            errors: FieldErrors::new(),
        },
    }
}

#[cfg(test)]
mod form_evolve_tests {
    use super::*;
    use crate::modules::event_form::core::draft::EventDraft;
    use crate::modules::event_form::core::validation::validate;
    use crate::modules::events::core::category::Category;
    use crate::tests::fixtures::drafts::EventDraftBuilder;
    use rstest::rstest;

    fn editing_with_errors() -> FormState {
        let draft = EventDraftBuilder::new().title("").price("").build();
        let errors = validate(&draft).unwrap_err();
        FormState::Editing { draft, errors }
    }

    #[rstest]
    fn it_should_clear_only_the_changed_fields_error() {
        let state = evolve(
            editing_with_errors(),
            FormEvent::FieldChanged {
                field: Field::Title,
                value: "Launch party".into(),
            },
        );
        assert_eq!(state.draft().title, "Launch party");
        assert!(!state.errors().contains(Field::Title));
        assert!(state.errors().contains(Field::Price));
    }

    #[rstest]
    fn it_should_clear_the_error_even_if_the_new_value_is_still_invalid() {
        let state = evolve(
            editing_with_errors(),
            FormEvent::FieldChanged {
                field: Field::Price,
                value: "-1".into(),
            },
        );
        assert!(!state.errors().contains(Field::Price));
    }

    #[rstest]
    fn it_should_change_the_category() {
        let state = evolve(
            FormState::default(),
            FormEvent::CategoryChanged {
                category: Category::Webinar,
            },
        );
        assert_eq!(state.draft().category, Category::Webinar);
    }

    #[rstest]
    fn it_should_replace_errors_on_validation_failure() {
        let errors = validate(&EventDraft::default()).unwrap_err();
        let state = evolve(
            editing_with_errors(),
            FormEvent::ValidationFailed {
                errors: errors.clone(),
            },
        );
        assert_eq!(state.errors(), &errors);
        assert!(!state.is_submitted());
    }

    #[rstest]
    fn it_should_retain_the_draft_when_submitted() {
        let draft = EventDraftBuilder::new().build();
        let event = validate(&draft).unwrap();
        let state = evolve(
            FormState::Editing {
                draft: draft.clone(),
                errors: FieldErrors::new(),
            },
            FormEvent::EventSubmitted {
                submission: 7,
                event,
            },
        );
        assert_eq!(
            state,
            FormState::Submitted {
                draft,
                submission: 7
            }
        );
    }

    #[rstest]
    fn it_should_keep_editing_the_draft_while_submitted() {
        let submitted = FormState::Submitted {
            draft: EventDraftBuilder::new().build(),
            submission: 1,
        };
        let state = evolve(
            submitted,
            FormEvent::FieldChanged {
                field: Field::Location,
                value: "Denver, CO".into(),
            },
        );
        assert!(state.is_submitted());
        assert_eq!(state.draft().location, "Denver, CO");
    }

    #[rstest]
    #[case(editing_with_errors())]
    #[case(FormState::Submitted { draft: EventDraftBuilder::new().build(), submission: 3 })]
    fn it_should_clear_everything_on_reset(#[case] state: FormState) {
        assert_eq!(evolve(state, FormEvent::FormReset), FormState::default());
    }
}
