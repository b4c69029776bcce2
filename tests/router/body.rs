use axum::{
    body::Body,
    http::{header, Request},
};
use tower::ServiceExt;

use super::*;
use crate::util::into_json;

/// Expect 400 with a JSON message when the body is not JSON
#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/planet")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Endor\""))
        .unwrap();
    let (status, body) = into_json(app(&test).oneshot(request).await.unwrap()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].is_string());

    Ok(())
}

/// Expect 400 when no body is sent at all
#[tokio::test]
async fn missing_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = send(app(&test), Method::POST, "/favorite", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].is_string());

    Ok(())
}

/// Expect 400 when a value has the wrong type
#[tokio::test]
async fn wrongly_typed_value_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let mut submitted = factory::planet_payload("Mandalore");
    submitted["population"] = json!("many");

    let (status, _) = send(app(&test), Method::POST, "/planet", Some(submitted)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 with a JSON message for an ID that is not an integer
#[tokio::test]
async fn non_integer_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = send(app(&test), Method::GET, "/planet/tatooine", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].is_string());

    Ok(())
}

/// Expect a user created over HTTP to never expose its password
#[tokio::test]
async fn user_responses_omit_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, created) = send(
        app(&test),
        Method::POST,
        "/user",
        Some(factory::user_payload("wedge")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, fetched) = send(app(&test), Method::GET, "/user/1", None).await;
    let (_, listed) = send(app(&test), Method::GET, "/user", None).await;

    assert!(created.get("password").is_none());
    assert!(fetched.get("password").is_none());
    assert!(listed["Users"][0].get("password").is_none());

    Ok(())
}

/// Expect 404 with a JSON message for a path that matches no route
#[tokio::test]
async fn unknown_path_is_json_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = send(app(&test), Method::GET, "/starship", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "Route not found" }));

    Ok(())
}

/// Expect 405 with a JSON message for a method the path does not accept
#[tokio::test]
async fn unsupported_method_is_json_method_not_allowed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("lando")
        .build()
        .await?;

    let (status, body) = send(app(&test), Method::DELETE, "/user/1", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "msg": "Method not allowed" }));

    let (status, _) = send(app(&test), Method::GET, "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}
