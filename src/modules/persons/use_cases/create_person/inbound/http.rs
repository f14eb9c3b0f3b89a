use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::http::api_error::ApiError;
use crate::shared::http::payload::JsonPayload;
use crate::shell::state::AppState;

/// Answers 200 rather than 201; existing clients depend on it.
pub async fn handle(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<impl IntoResponse, ApiError> {
    let person = state.create_handler.handle(&payload).await?;
    Ok((StatusCode::OK, Json(person)))
}
