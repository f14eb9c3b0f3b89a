use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete(&person_id)
        .await?
        .ok_or(ApiError::PersonNotFound)?;
    tracing::info!(person_id = %person_id, "person deleted");
    Ok(StatusCode::NO_CONTENT)
}
