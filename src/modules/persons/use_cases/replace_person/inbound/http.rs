use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::persons::core::person::Person;
use crate::shared::http::api_error::ApiError;
use crate::shared::http::payload::JsonPayload;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<Person>, ApiError> {
    let person = state.replace_handler.handle(&person_id, &payload).await?;
    Ok(Json(person))
}
