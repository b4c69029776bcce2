use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::model::api::MissingFields;

/// Public projection of a favorite
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub favorite_id: i32,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            kind: favorite.r#type,
            favorite_id: favorite.favorite_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteListDto {
    pub msg: String,
    #[serde(rename = "Favorites")]
    pub favorites: Vec<FavoriteDto>,
}

/// Body of `POST /favorite`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateFavoriteDto {
    pub favorite_id: Option<i32>,
    /// Either `planet` or `character`, selects what `favorite_id` refers to
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub user_id: Option<i32>,
}

/// The collection a favorite's `favorite_id` points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteKind {
    Planet,
    Character,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Character => "character",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteKind {
    type Err = InvalidFavorite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planet" => Ok(Self::Planet),
            "character" => Ok(Self::Character),
            other => Err(InvalidFavorite::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidFavorite {
    #[error(transparent)]
    Missing(#[from] MissingFields),
    #[error("Unknown favorite type '{0}', expected 'planet' or 'character'")]
    UnknownKind(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub favorite_id: i32,
}

impl TryFrom<CreateFavoriteDto> for NewFavorite {
    type Error = InvalidFavorite;

    fn try_from(dto: CreateFavoriteDto) -> Result<Self, Self::Error> {
        let missing = MissingFields::from_checks(&[
            ("favorite_id", dto.favorite_id.is_none()),
            ("type", dto.kind.is_none()),
            ("user_id", dto.user_id.is_none()),
        ]);

        let (Some(favorite_id), Some(kind), Some(user_id)) =
            (dto.favorite_id, dto.kind, dto.user_id)
        else {
            return Err(missing.into());
        };

        Ok(Self {
            user_id,
            kind: kind.parse()?,
            favorite_id,
        })
    }
}
