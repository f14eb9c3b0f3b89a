use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde_json::{Map, Value};

use crate::shared::http::api_error::ApiError;

/// Loosely typed JSON request body, left for the validator to inspect.
///
/// A body that is empty or not declared as `application/json` reads as `{}`. A declared JSON body
/// that fails to parse is an internal failure.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Internal(format!("failed to read request body: {e}")))?;

        if !declared_json || bytes.is_empty() {
            return Ok(JsonPayload(Value::Object(Map::new())));
        }

        serde_json::from_slice(&bytes)
            .map(JsonPayload)
            .map_err(|e| ApiError::Internal(format!("malformed JSON body: {e}")))
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
