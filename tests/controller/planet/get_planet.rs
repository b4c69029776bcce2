use axum::{extract::State, http::StatusCode};
use holonet::server::controller::{
    planet::{get_planet, get_planets},
    util::extract::IdPath,
};

use super::*;

/// Expect 200 with the stored planet
#[tokio::test]
async fn returns_planet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.planet().insert_mock_planet("Jakku").await?;

    let (status, body) = into_json(
        get_planet(State(test.to_app_state::<AppState>()), IdPath(planet.id)).await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jakku");
    assert_eq!(body["population"], 200000);
    assert_eq!(body["type"], "terrestrial");

    Ok(())
}

/// Expect 404 with `Planet not found` for an unknown ID
#[tokio::test]
async fn not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = into_json(
        get_planet(State(test.to_app_state::<AppState>()), IdPath(999999)).await,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "msg": "Planet not found" }));

    Ok(())
}

/// Expect the list under the `Planets` key
#[tokio::test]
async fn lists_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Mustafar")
        .with_mock_planet("Kashyyyk")
        .build()
        .await?;

    let (status, body) =
        into_json(get_planets(State(test.to_app_state::<AppState>())).await).await;

    assert_eq!(status, StatusCode::OK);
    let planets = body["Planets"].as_array().unwrap();
    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0]["name"], "Mustafar");

    Ok(())
}
