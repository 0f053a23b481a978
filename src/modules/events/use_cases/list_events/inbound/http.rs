use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::category::CategorySelection;
use crate::shell::state::AppState;

/// Absent parameters keep the page's current filters.
#[derive(Deserialize)]
pub struct ListEventsParams {
    pub category: Option<String>,
    pub search: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    let category = match params
        .category
        .as_deref()
        .map(str::parse::<CategorySelection>)
        .transpose()
    {
        Ok(category) => category,
        Err(error) => return (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
    };

    let mut page = state.events.lock().await;
    if let Some(category) = category {
        page.select_category(category);
    }
    if let Some(search) = params.search {
        page.search(search);
    }
    Json(page.view()).into_response()
}
