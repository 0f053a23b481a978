use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn view(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.navbar.lock().await.view())
}

pub async fn toggle(State(state): State<AppState>) -> impl IntoResponse {
    let mut navbar = state.navbar.lock().await;
    navbar.toggle_menu();
    Json(navbar.view())
}

pub async fn follow(State(state): State<AppState>) -> impl IntoResponse {
    let mut navbar = state.navbar.lock().await;
    navbar.follow_link();
    Json(navbar.view())
}
