use super::*;

/// Expect a posted planet to be readable at its new ID with the same fields
#[tokio::test]
async fn create_then_get_returns_same_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let submitted = factory::planet_payload("Tatooine");

    let (status, created) = send(
        app(&test),
        Method::POST,
        "/planet",
        Some(submitted.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, mut fetched) = send(app(&test), Method::GET, &format!("/planet/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    fetched.as_object_mut().unwrap().remove("id");
    assert_eq!(fetched, submitted);

    Ok(())
}

/// Expect 404 with `Planet not found` for an ID that was never created
#[tokio::test]
async fn get_nonexistent_planet_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = send(app(&test), Method::GET, "/planet/999999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "Planet not found" }));

    Ok(())
}

/// Expect a partial PUT to change only the submitted field
#[tokio::test]
async fn put_changes_only_submitted_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Naboo")
        .build()
        .await?;

    let (_, before) = send(app(&test), Method::GET, "/planet/1", None).await;
    let (status, after) = send(
        app(&test),
        Method::PUT,
        "/planet/1",
        Some(json!({ "population": 4500000000i64 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["population"], 4500000000i64);

    let mut expected = before;
    expected["population"] = json!(4500000000i64);
    assert_eq!(after, expected);

    Ok(())
}

/// Expect a deleted planet to disappear from the listing
#[tokio::test]
async fn delete_removes_planet_from_listing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Alderaan")
        .with_mock_planet("Hoth")
        .build()
        .await?;

    let (status, _) = send(app(&test), Method::DELETE, "/planet/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app(&test), Method::GET, "/planet", None).await;
    let planets = body["Planets"].as_array().unwrap();

    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0]["name"], "Hoth");

    Ok(())
}
