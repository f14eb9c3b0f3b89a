use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::persons::core::person::Person;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    state
        .store
        .get(&person_id)
        .await?
        .map(Json)
        .ok_or(ApiError::PersonNotFound)
}
