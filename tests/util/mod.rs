//! Helpers shared by the integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use holonet::server::{model::app::AppState, router};
use holonet_test_utils::TestContext;
use serde_json::Value;
use tower::ServiceExt;

/// Splits a response into its status and JSON body.
pub async fn into_json(resp: impl IntoResponse) -> (StatusCode, Value) {
    let resp: Response = resp.into_response();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Builds the full application on top of the test database.
pub fn app(test: &TestContext) -> Router {
    router::app(test.to_app_state::<AppState>())
}

/// Sends one request through `app`, with `body` serialized as JSON when present.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    into_json(app.oneshot(request).await.unwrap()).await
}
