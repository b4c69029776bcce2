use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, NewUser, UserDto, UserListDto},
    },
    server::{
        controller::util::extract::{IdPath, JsonBody},
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag grouping the user routes
pub static USER_TAG: &str = "user";

/// List every user
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            msg: "Hello, this is your GET /user response".to_string(),
            users,
        }),
    ))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving the user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        return Err(Error::NotFound("User"));
    };

    Ok((StatusCode::OK, Json(user)))
}

/// Register a new user
///
/// The password is stored hashed and never returned.
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 409, description = "Username or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = NewUser::try_from(payload)?;
    let user = UserService::new(&state.db).create_user(user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
