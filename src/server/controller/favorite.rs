use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{CreateFavoriteDto, FavoriteDto, FavoriteListDto, NewFavorite},
    },
    server::{
        controller::util::extract::{IdPath, JsonBody},
        error::Error,
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag grouping the favorite routes
pub static FAVORITE_TAG: &str = "favorite";

/// List every favorite
#[utoipa::path(
    get,
    path = "/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when listing favorites", body = FavoriteListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).get_favorites().await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteListDto {
            msg: "Hello, this is your GET /favorites response".to_string(),
            favorites,
        }),
    ))
}

/// Mark a planet or character as a favorite of a user
#[utoipa::path(
    post,
    path = "/favorite",
    tag = FAVORITE_TAG,
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Missing fields or unknown type", body = ErrorDto),
        (status = 404, description = "User, planet or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite = NewFavorite::try_from(payload)?;
    let favorite = FavoriteService::new(&state.db)
        .create_favorite(favorite)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Delete a favorite
#[utoipa::path(
    delete,
    path = "/favorite/{favorite_id}",
    tag = FAVORITE_TAG,
    params(("favorite_id" = i32, Path, description = "ID of the favorite")),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    IdPath(favorite_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    if !FavoriteService::new(&state.db)
        .delete_favorite(favorite_id)
        .await?
    {
        return Err(Error::NotFound("Favorite"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: "Favorite deleted successfully".to_string(),
        }),
    ))
}
