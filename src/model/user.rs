use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::MissingFields;

/// Public projection of a user, the password is never part of it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub msg: String,
    #[serde(rename = "Users")]
    pub users: Vec<UserDto>,
}

/// Body of `POST /user`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    /// Write-only, stored as an Argon2id hash
    pub password: Option<String>,
}

/// A user payload with every required field present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<CreateUserDto> for NewUser {
    type Error = MissingFields;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        let missing = MissingFields::from_checks(&[
            ("username", dto.username.is_none()),
            ("email", dto.email.is_none()),
            ("password", dto.password.is_none()),
        ]);

        let (Some(username), Some(email), Some(password)) = (dto.username, dto.email, dto.password)
        else {
            return Err(missing);
        };

        Ok(Self {
            username,
            email,
            password,
        })
    }
}
