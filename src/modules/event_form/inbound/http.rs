use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::event_form::handler::ApplicationError;
use crate::modules::event_form::use_cases::change_field::command::ChangeField;
use crate::shell::state::AppState;

pub async fn view(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.form.view().await)
}

pub async fn change_field(
    State(state): State<AppState>,
    body: Result<Json<ChangeField>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.form.change_field(command).await {
        Ok(()) => Json(state.form.view().await).into_response(),
        Err(ApplicationError::Domain(reason)) => {
            (StatusCode::BAD_REQUEST, reason.to_string()).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "failed to change form field");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn submit(State(state): State<AppState>) -> impl IntoResponse {
    match state.form.submit().await {
        Ok(_) => (StatusCode::CREATED, Json(state.form.view().await)).into_response(),
        Err(ApplicationError::Invalid(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(state.form.view().await)).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "failed to submit event form");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    match state.form.reset().await {
        Ok(()) => Json(state.form.view().await).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to reset event form");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
