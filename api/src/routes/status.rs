use axum::{Json, extract::State};
use chrono::Utc;

use crate::{dto::StatusResponse, states::AppState};

/// GET /
/// Response: 200 OK with JSON
/// `{"status":"ok","service":"user-management-placeholder","env":"...","timestamp":"...Z"}`
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse::new(&state.config.app_env, Utc::now()))
}
