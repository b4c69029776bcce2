use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        planet::{CreatePlanetDto, NewPlanet, PlanetDto, PlanetListDto, PlanetPatch, UpdatePlanetDto},
    },
    server::{
        controller::util::extract::{IdPath, JsonBody},
        error::Error,
        model::app::AppState,
        service::planet::PlanetService,
    },
};

/// OpenAPI tag grouping the planet routes
pub static PLANET_TAG: &str = "planet";

/// List every planet
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = PlanetListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_planets().await?;

    Ok((
        StatusCode::OK,
        Json(PlanetListDto {
            msg: "Hello, this is your GET /planet response".to_string(),
            planets,
        }),
    ))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let Some(planet) = PlanetService::new(&state.db).get_planet(planet_id).await? else {
        return Err(Error::NotFound("Planet"));
    };

    Ok((StatusCode::OK, Json(planet)))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 409, description = "Planet name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = NewPlanet::try_from(payload)?;
    let planet = PlanetService::new(&state.db).create_planet(planet).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

/// Update the fields of a planet present in the body
#[utoipa::path(
    put,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "Planet after the update", body = PlanetDto),
        (status = 400, description = "Invalid or null fields", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 409, description = "Planet name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
    JsonBody(payload): JsonBody<UpdatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let patch = PlanetPatch::try_from(payload)?;

    let Some(planet) = PlanetService::new(&state.db)
        .update_planet(planet_id, patch)
        .await?
    else {
        return Err(Error::NotFound("Planet"));
    };

    Ok((StatusCode::OK, Json(planet)))
}

/// Delete a planet
#[utoipa::path(
    delete,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    if !PlanetService::new(&state.db).delete_planet(planet_id).await? {
        return Err(Error::NotFound("Planet"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: "Planet deleted successfully".to_string(),
        }),
    ))
}
