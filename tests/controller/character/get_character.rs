use axum::{extract::State, http::StatusCode};
use holonet::server::controller::{
    character::{get_character, get_characters},
    util::extract::IdPath,
};

use super::*;

/// Expect 200 with an empty `Characters` list when there are no characters
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) =
        into_json(get_characters(State(test.to_app_state::<AppState>())).await).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["msg"].is_string());
    assert_eq!(body["Characters"], serde_json::json!([]));

    Ok(())
}

/// Expect every character under the `Characters` key, ordered by ID
#[tokio::test]
async fn lists_characters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_character("Luke Skywalker")
        .with_mock_character("Leia Organa")
        .build()
        .await?;

    let (status, body) =
        into_json(get_characters(State(test.to_app_state::<AppState>())).await).await;

    assert_eq!(status, StatusCode::OK);
    let characters = body["Characters"].as_array().unwrap();
    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0]["id"], 1);
    assert_eq!(characters[0]["name"], "Luke Skywalker");
    assert_eq!(characters[1]["name"], "Leia Organa");
    assert_eq!(characters[1]["type"], "human");

    Ok(())
}

/// Expect 200 with the stored character
#[tokio::test]
async fn returns_character() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let character = test.character().insert_mock_character("Rey").await?;

    let (status, body) = into_json(
        get_character(State(test.to_app_state::<AppState>()), IdPath(character.id)).await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Rey");
    assert_eq!(body["height"], character.height);

    Ok(())
}

/// Expect 404 with `Character not found` for an unknown ID
#[tokio::test]
async fn not_found_for_nonexistent_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = into_json(
        get_character(State(test.to_app_state::<AppState>()), IdPath(404)).await,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "msg": "Character not found" }));

    Ok(())
}
