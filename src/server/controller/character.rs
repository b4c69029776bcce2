use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        character::{
            CharacterDto, CharacterListDto, CharacterPatch, CreateCharacterDto, NewCharacter,
            UpdateCharacterDto,
        },
    },
    server::{
        controller::util::extract::{IdPath, JsonBody},
        error::Error,
        model::app::AppState,
        service::character::CharacterService,
    },
};

/// OpenAPI tag grouping the character routes
pub static CHARACTER_TAG: &str = "character";

/// List every character
#[utoipa::path(
    get,
    path = "/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when listing characters", body = CharacterListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).get_characters().await?;

    Ok((
        StatusCode::OK,
        Json(CharacterListDto {
            msg: "Hello, this is your GET /character response".to_string(),
            characters,
        }),
    ))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/character/{character_id}",
    tag = CHARACTER_TAG,
    params(("character_id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Success when retrieving the character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let Some(character) = CharacterService::new(&state.db)
        .get_character(character_id)
        .await?
    else {
        return Err(Error::NotFound("Character"));
    };

    Ok((StatusCode::OK, Json(character)))
}

/// Create a character
#[utoipa::path(
    post,
    path = "/character",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 409, description = "Character name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character = NewCharacter::try_from(payload)?;
    let character = CharacterService::new(&state.db)
        .create_character(character)
        .await?;

    Ok((StatusCode::CREATED, Json(character)))
}

/// Update the fields of a character present in the body
#[utoipa::path(
    put,
    path = "/character/{character_id}",
    tag = CHARACTER_TAG,
    params(("character_id" = i32, Path, description = "ID of the character")),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Character after the update", body = CharacterDto),
        (status = 400, description = "Invalid or null fields", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 409, description = "Character name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
    JsonBody(payload): JsonBody<UpdateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let patch = CharacterPatch::try_from(payload)?;

    let Some(character) = CharacterService::new(&state.db)
        .update_character(character_id, patch)
        .await?
    else {
        return Err(Error::NotFound("Character"));
    };

    Ok((StatusCode::OK, Json(character)))
}

/// Delete a character
#[utoipa::path(
    delete,
    path = "/character/{character_id}",
    tag = CHARACTER_TAG,
    params(("character_id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    if !CharacterService::new(&state.db)
        .delete_character(character_id)
        .await?
    {
        return Err(Error::NotFound("Character"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: "Character deleted successfully".to_string(),
        }),
    ))
}
