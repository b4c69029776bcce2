use axum::{extract::State, http::StatusCode};
use holonet::{
    model::planet::CreatePlanetDto,
    server::controller::{planet::create_planet, util::extract::JsonBody},
};

use super::*;

fn payload(value: serde_json::Value) -> JsonBody<CreatePlanetDto> {
    JsonBody(serde_json::from_value(value).unwrap())
}

/// Expect 201 with every submitted field echoed back and a generated ID
#[tokio::test]
async fn creates_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let submitted = factory::planet_payload("Bespin");

    let (status, mut body) = into_json(
        create_planet(
            State(test.to_app_state::<AppState>()),
            payload(submitted.clone()),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    body.as_object_mut().unwrap().remove("id");
    assert_eq!(body, submitted);

    Ok(())
}

/// Expect 400 listing every missing field
#[tokio::test]
async fn bad_request_for_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let submitted = factory::without(
        factory::without(factory::planet_payload("Scarif"), "population"),
        "type",
    );

    let (status, body) = into_json(
        create_planet(State(test.to_app_state::<AppState>()), payload(submitted)).await,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Missing required fields: population, type");

    Ok(())
}

/// Expect 409 and no second record for a duplicate name
#[tokio::test]
async fn conflict_for_duplicate_name() -> Result<(), TestError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Coruscant")
        .build()
        .await?;

    let (status, body) = into_json(
        create_planet(
            State(test.to_app_state::<AppState>()),
            payload(factory::planet_payload("Coruscant")),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["msg"], "A planet with this name already exists");
    assert_eq!(entity::prelude::Planet::find().count(&test.db).await?, 1);

    Ok(())
}
