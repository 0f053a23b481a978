use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::event_form::inbound::http as form_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::toggle_registration::inbound::http as toggle_http;
use crate::modules::navigation::inbound::http as nav_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/nav", get(nav_http::view))
        .route("/nav/toggle", post(nav_http::toggle))
        .route("/nav/follow", post(nav_http::follow))
        .route("/events", get(list_http::handle))
        .route("/events/{event_id}/registration", post(toggle_http::handle))
        .route("/create-event", get(form_http::view))
        .route("/create-event/fields", patch(form_http::change_field))
        .route("/create-event/submit", post(form_http::submit))
        .route("/create-event/reset", post(form_http::reset))
        .with_state(state)
}
