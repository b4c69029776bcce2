use super::*;

/// Expect a character favorite posted over HTTP to show up in the listing
#[tokio::test]
async fn create_character_favorite_then_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("luke")
        .with_mock_character("Yoda")
        .build()
        .await?;

    let (status, created) = send(
        app(&test),
        Method::POST,
        "/favorite",
        Some(factory::favorite_payload(1, "character", 1)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "character");
    assert_eq!(created["favorite_id"], 1);
    assert_eq!(created["user_id"], 1);

    let (status, listed) = send(app(&test), Method::GET, "/favorites", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["Favorites"], json!([created]));

    Ok(())
}

/// Expect an empty listing before any favorite is created
#[tokio::test]
async fn empty_listing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = send(app(&test), Method::GET, "/favorites", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Favorites"], json!([]));

    Ok(())
}
