// Controller for the creation form.
//
// Responsibilities
// - Serialize commands against the form state and fold the decided events.
// - Dispatch intents: log created events, schedule and cancel the delayed reset.
//
// The pending reset lives outside the shared session so that dropping the
// handler aborts it even while the task itself holds the session.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::event_form::core::decision::{DecideError, Decision};
use crate::modules::event_form::core::events::FormEvent;
use crate::modules::event_form::core::evolve::evolve;
use crate::modules::event_form::core::intents::FormIntent;
use crate::modules::event_form::core::state::{FormState, SubmissionId};
use crate::modules::event_form::core::validation::{FieldErrors, NewEvent};
use crate::modules::event_form::use_cases::change_field::command::ChangeField;
use crate::modules::event_form::use_cases::change_field::decide::decide_change;
use crate::modules::event_form::use_cases::reset_form::command::ResetForm;
use crate::modules::event_form::use_cases::reset_form::decide::decide_reset;
use crate::modules::event_form::use_cases::submit_event::command::SubmitEvent;
use crate::modules::event_form::use_cases::submit_event::decide::decide_submit;
use crate::modules::event_form::view::FormView;
use crate::shared::infrastructure::scheduler::ScheduledTask;

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

#[derive(Debug, Default)]
struct FormSession {
    state: FormState,
    last_submission: SubmissionId,
}

impl FormSession {
    fn apply(&mut self, decision: Decision) -> Result<(Vec<FormEvent>, Vec<FormIntent>), DecideError> {
        match decision {
            Decision::Accepted { events, intents } => {
                let state = std::mem::take(&mut self.state);
                self.state = events.iter().cloned().fold(state, evolve);
                Ok((events, intents))
            }
            Decision::Rejected { reason } => Err(reason),
        }
    }
}

async fn run_scheduled_reset(session: Arc<Mutex<FormSession>>, submission: SubmissionId) {
    let mut guard = session.lock().await;
    let decision = decide_reset(&guard.state, ResetForm::Scheduled { submission });
    match guard.apply(decision) {
        Ok(_) => tracing::debug!(submission, "form reset after submission"),
        Err(reason) => tracing::debug!(%reason, "scheduled form reset skipped"),
    }
}

pub struct EventFormHandler {
    session: Arc<Mutex<FormSession>>,
    pending_reset: Mutex<Option<ScheduledTask>>,
    reset_delay: Duration,
}

impl Default for EventFormHandler {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

impl EventFormHandler {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(FormSession::default())),
            pending_reset: Mutex::new(None),
            reset_delay,
        }
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub async fn state(&self) -> FormState {
        self.session.lock().await.state.clone()
    }

    pub async fn view(&self) -> FormView {
        FormView::render(&self.session.lock().await.state)
    }

    pub async fn has_pending_reset(&self) -> bool {
        self.pending_reset
            .lock()
            .await
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    pub async fn change_field(&self, command: ChangeField) -> Result<(), ApplicationError> {
        self.execute(|session| decide_change(&session.state, command))
            .await
            .map(|_| ())
    }

    /// Validate and submit the draft. On success the form resets after the configured delay.
    pub async fn submit(&self) -> Result<NewEvent, ApplicationError> {
        let events = self
            .execute(|session| {
                session.last_submission += 1;
                let command = SubmitEvent {
                    submission: session.last_submission,
                };
                decide_submit(&session.state, command)
            })
            .await?;

        match events.into_iter().next() {
            Some(FormEvent::EventSubmitted { event, .. }) => Ok(event),
            Some(FormEvent::ValidationFailed { errors }) => Err(ApplicationError::Invalid(errors)),
            other => Err(ApplicationError::Unexpected(format!(
                "submit produced {other:?}"
            ))),
        }
    }

    /// Clear the draft and errors immediately, superseding any pending delayed reset.
    pub async fn reset(&self) -> Result<(), ApplicationError> {
        self.execute(|session| decide_reset(&session.state, ResetForm::Manual))
            .await
            .map(|_| ())
    }

    async fn execute<F>(&self, decide: F) -> Result<Vec<FormEvent>, ApplicationError>
    where
        F: FnOnce(&mut FormSession) -> Decision,
    {
        let (events, intents) = {
            let mut session = self.session.lock().await;
            let decision = decide(&mut *session);
            session.apply(decision)?
        };
        self.dispatch_intents(intents).await;
        Ok(events)
    }

    async fn dispatch_intents(&self, intents: Vec<FormIntent>) {
        for intent in intents {
            match intent {
                FormIntent::LogCreatedEvent { event } => match serde_json::to_string(&event) {
                    Ok(json) => tracing::info!(event = %json, "event created"),
                    Err(error) => tracing::warn!(%error, title = %event.title, "event created"),
                },
                FormIntent::ScheduleReset { submission } => {
                    let task = ScheduledTask::after(
                        self.reset_delay,
                        run_scheduled_reset(self.session.clone(), submission),
                    );
                    // Replacing the previous task drops and aborts it.
                    *self.pending_reset.lock().await = Some(task);
                }
                FormIntent::CancelScheduledReset => {
                    if let Some(task) = self.pending_reset.lock().await.take() {
                        task.cancel();
                    }
                }
            }
        }
    }
}
