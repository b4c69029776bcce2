use axum::{extract::State, http::StatusCode};
use holonet::{
    model::user::CreateUserDto,
    server::controller::{user::create_user, util::extract::JsonBody},
};

use super::*;

fn payload(value: serde_json::Value) -> JsonBody<CreateUserDto> {
    JsonBody(serde_json::from_value(value).unwrap())
}

/// Expect 201 with the created user and no password in the response
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = into_json(
        create_user(
            State(test.to_app_state::<AppState>()),
            payload(factory::user_payload("rey")),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "rey");
    assert_eq!(body["is_active"], true);
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect the stored password to be a hash rather than the submitted value
#[tokio::test]
async fn stores_hashed_password() -> Result<(), TestError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, _) = into_json(
        create_user(
            State(test.to_app_state::<AppState>()),
            payload(factory::user_payload("finn")),
        )
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let stored = entity::prelude::User::find_by_id(1).one(&test.db).await?.unwrap();
    assert_ne!(stored.password, "use the force");
    assert!(stored.password.starts_with("$argon2id$"));

    Ok(())
}

/// Expect 400 naming the missing field, with no user created
#[tokio::test]
async fn bad_request_for_missing_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = into_json(
        create_user(
            State(test.to_app_state::<AppState>()),
            payload(factory::without(factory::user_payload("poe"), "password")),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Missing required fields: password");

    Ok(())
}

/// Expect 409 when the email is already registered
#[tokio::test]
async fn conflict_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("rose")
        .build()
        .await?;

    let mut duplicate = factory::user_payload("tico");
    duplicate["email"] = "rose@holonet.test".into();

    let (status, body) = into_json(
        create_user(State(test.to_app_state::<AppState>()), payload(duplicate)).await,
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["msg"], "A user with this username or email already exists");

    Ok(())
}
