use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn seeded_app() -> Router {
    router(AppState::in_memory(&AppConfig::default()))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn lists_the_seeded_person() {
    let app = seeded_app();

    let response = send(&app, empty_request("GET", "/person")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"id": "1", "name": "Sam", "age": 26, "hobbies": []}])
    );
}

#[tokio::test]
async fn created_person_can_be_read_back_and_is_listed_last() {
    let app = seeded_app();
    let payload = json!({"name": "Ann", "age": 30, "hobbies": ["reading"]});

    let created = send(&app, json_request("POST", "/person", payload)).await;
    assert_eq!(created.status(), StatusCode::OK);
    let created = body_json(created).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_ne!(id, "1");

    let fetched = send(&app, empty_request("GET", &format!("/person/{id}"))).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await, created);

    let listed = body_json(send(&app, empty_request("GET", "/person")).await).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], "1");
    assert_eq!(listed[1], created);
}

#[tokio::test]
async fn replacing_keeps_id_position_and_length() {
    let app = seeded_app();
    send(
        &app,
        json_request("POST", "/person", json!({"name": "Ann", "age": 30, "hobbies": []})),
    )
    .await;

    let response = send(
        &app,
        json_request(
            "PUT",
            "/person/1",
            json!({"name": "Sam", "age": 27, "hobbies": ["chess"]}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": "1", "name": "Sam", "age": 27, "hobbies": ["chess"]})
    );
    let listed = body_json(send(&app, empty_request("GET", "/person")).await).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], "1");
    assert_eq!(listed[0]["age"], 27);
}

#[tokio::test]
async fn unknown_ids_are_404_for_every_id_route() {
    let app = seeded_app();
    let valid = json!({"name": "Sam", "age": 27, "hobbies": []});

    for request in [
        empty_request("GET", "/person/unknown"),
        json_request("PUT", "/person/unknown", valid),
        empty_request("DELETE", "/person/unknown"),
    ] {
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Person not found"})
        );
    }
}

#[tokio::test]
async fn deleting_removes_the_person_and_is_not_repeatable() {
    let app = seeded_app();

    let first = send(&app, empty_request("DELETE", "/person/1")).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let fetched = send(&app, empty_request("GET", "/person/1")).await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);

    let second = send(&app, empty_request("DELETE", "/person/1")).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let listed = body_json(send(&app, empty_request("GET", "/person")).await).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn invalid_payloads_never_reach_the_store() {
    let app = seeded_app();

    let missing_name = send(
        &app,
        json_request("POST", "/person", json!({"age": 26, "hobbies": []})),
    )
    .await;
    assert_eq!(missing_name.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(missing_name).await,
        json!({"error": "Name is required"})
    );

    let negative_age = send(
        &app,
        json_request("POST", "/person", json!({"name": "A", "age": -1, "hobbies": []})),
    )
    .await;
    assert_eq!(negative_age.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(negative_age).await,
        json!({"error": "Age must be a non-negative number"})
    );

    let listed = body_json(send(&app, empty_request("GET", "/person")).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unmatched_routes_are_404() {
    let app = seeded_app();

    let response = send(&app, empty_request("GET", "/nope")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Route not found"})
    );
}
