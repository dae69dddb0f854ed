use axum::{extract::State, response::IntoResponse};

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    format!(
        "{}\nCall this endpoint from http://localhost:3000 or any *.example.com page.",
        state.greeting
    )
}
