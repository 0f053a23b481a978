use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::events::use_cases::toggle_registration::command::ToggleRegistration;
use crate::shared::core::primitives::EventId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<EventId>,
) -> impl IntoResponse {
    let outcome = state
        .events
        .lock()
        .await
        .toggle_registration(ToggleRegistration { event_id });
    Json(outcome)
}
