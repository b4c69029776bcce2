use axum::{extract::State, http::StatusCode};
use holonet::{
    model::planet::UpdatePlanetDto,
    server::controller::{
        planet::update_planet,
        util::extract::{IdPath, JsonBody},
    },
};
use serde_json::json;

use super::*;

fn payload(value: serde_json::Value) -> JsonBody<UpdatePlanetDto> {
    JsonBody(serde_json::from_value(value).unwrap())
}

/// Expect only the submitted fields to change
#[tokio::test]
async fn updates_present_fields_only() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.planet().insert_mock_planet("Geonosis").await?;

    let (status, body) = into_json(
        update_planet(
            State(test.to_app_state::<AppState>()),
            IdPath(planet.id),
            payload(json!({ "climate": "temperate", "type": "rocky" })),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["climate"], "temperate");
    assert_eq!(body["type"], "rocky");
    assert_eq!(body["name"], "Geonosis");
    assert_eq!(body["terrain"], planet.terrain);
    assert_eq!(body["population"], planet.population);
    assert_eq!(body["diameter"], planet.diameter);

    Ok(())
}

/// Expect an empty body to return the unchanged planet
#[tokio::test]
async fn empty_body_returns_unchanged_planet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.planet().insert_mock_planet("Utapau").await?;

    let (status, body) = into_json(
        update_planet(
            State(test.to_app_state::<AppState>()),
            IdPath(planet.id),
            payload(json!({})),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Utapau");
    assert_eq!(body["climate"], planet.climate);

    Ok(())
}

/// Expect 404 for a planet that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = into_json(
        update_planet(
            State(test.to_app_state::<AppState>()),
            IdPath(7),
            payload(json!({ "name": "Ilum" })),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Planet not found");

    Ok(())
}

/// Expect 400 when a field is set to null
#[tokio::test]
async fn bad_request_for_null_field() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.planet().insert_mock_planet("Crait").await?;

    let (status, body) = into_json(
        update_planet(
            State(test.to_app_state::<AppState>()),
            IdPath(planet.id),
            payload(json!({ "terrain": null })),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Field 'terrain' cannot be null");

    Ok(())
}

/// Expect 409 when renaming a planet to a name already in use
#[tokio::test]
async fn conflict_for_duplicate_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Exegol")
        .build()
        .await?;
    let planet = test.planet().insert_mock_planet("Ahch-To").await?;

    let (status, _) = into_json(
        update_planet(
            State(test.to_app_state::<AppState>()),
            IdPath(planet.id),
            payload(json!({ "name": "Exegol" })),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);

    Ok(())
}
