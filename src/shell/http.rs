use axum::{
    Router,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::modules::persons::use_cases::create_person::inbound::http as create_http;
use crate::modules::persons::use_cases::delete_person::inbound::http as delete_http;
use crate::modules::persons::use_cases::get_person::inbound::http as get_http;
use crate::modules::persons::use_cases::list_persons::inbound::http as list_http;
use crate::modules::persons::use_cases::replace_person::inbound::http as replace_http;
use crate::shared::http::api_error::{ApiError, panic_response};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/person", collection_routes())
        .route("/person/", collection_routes())
        .route(
            "/person/{id}",
            get(get_http::handle)
                .put(replace_http::handle)
                .delete(delete_http::handle)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn collection_routes() -> MethodRouter<AppState> {
    get(list_http::handle)
        .post(create_http::handle)
        .fallback(route_not_found)
}

/// OPTIONS without a preflight header still succeeds on any path, like a CORS middleware would.
async fn route_not_found(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    ApiError::RouteNotFound.into_response()
}
