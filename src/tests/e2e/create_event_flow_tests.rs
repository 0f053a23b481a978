use std::time::Duration;

use crate::modules::event_form::core::field::Field;
use crate::modules::event_form::handler::{ApplicationError, EventFormHandler};
use crate::modules::event_form::use_cases::change_field::command::ChangeField;
use crate::modules::event_form::view::FormPhase;
use crate::tests::fixtures::drafts::{EventDraftBuilder, fill};

#[tokio::test(start_paused = true)]
async fn creates_an_event_after_fixing_validation_errors() {
    let handler = EventFormHandler::new(Duration::from_secs(3));
    fill(&handler, EventDraftBuilder::new().title("").build()).await;

    let Err(ApplicationError::Invalid(errors)) = handler.submit().await else {
        panic!("expected the blank title to be rejected");
    };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Title]);

    handler
        .change_field(ChangeField::new(Field::Title, "Tech Talk"))
        .await
        .unwrap();
    assert!(handler.view().await.errors.is_empty());

    let created = handler.submit().await.expect("valid draft was rejected");
    assert_eq!(created.title, "Tech Talk");
    assert_eq!(created.price, 10.0);

    let view = handler.view().await;
    assert_eq!(view.phase, FormPhase::Submitted);
    assert_eq!(view.draft.title, "Tech Talk");

    tokio::time::sleep(Duration::from_millis(3100)).await;
    let view = handler.view().await;
    assert_eq!(view.phase, FormPhase::Editing);
    assert_eq!(view.draft.title, "");
    assert!(view.errors.is_empty());
}
