use super::*;

/// Expect `/user/` to resolve to the same endpoint as `/user`
#[tokio::test]
async fn collection_with_trailing_slash() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("chewie")
        .build()
        .await?;

    let (status, with_slash) = send(app(&test), Method::GET, "/user/", None).await;
    let (_, without_slash) = send(app(&test), Method::GET, "/user", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(with_slash, without_slash);

    Ok(())
}

/// Expect a POST with a trailing slash to create the record
#[tokio::test]
async fn create_with_trailing_slash() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = send(
        app(&test),
        Method::POST,
        "/character/",
        Some(factory::character_payload("Ahsoka Tano")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ahsoka Tano");

    Ok(())
}

/// Expect an item path with a trailing slash to resolve
#[tokio::test]
async fn item_with_trailing_slash() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_character("Boba Fett")
        .build()
        .await?;

    let (status, body) = send(app(&test), Method::GET, "/character/1/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Boba Fett");

    Ok(())
}
