use axum::{Json, extract::State};

use crate::modules::persons::core::person::Person;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let persons = state.store.list().await?;
    Ok(Json(persons))
}
