//! Error types for the Holonet server application.
//!
//! [`Error`] is the single error type returned by services and controllers. Its
//! `IntoResponse` implementation is the one place where errors are rendered to JSON:
//! client errors keep their message, every other failure is logged and answered with a
//! generic 500 so that no internal detail reaches the client.

/// Configuration errors raised while reading the environment.
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::{
        api::{ErrorDto, MissingFields, NullField},
        favorite::InvalidFavorite,
    },
    server::error::config::ConfigError,
};

/// Main error type for the Holonet server application.
///
/// Domain variants carry the HTTP semantics of the failure (400, 404, 409), library errors
/// are folded in with `#[from]` so that `?` works across the service and data layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request payload is missing a required field or holds an invalid value.
    #[error("{0}")]
    Validation(String),
    /// The named entity does not exist, e.g. `NotFound("Planet")`.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The request would violate a uniqueness constraint.
    #[error("{0}")]
    Conflict(String),
    /// The path exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Classifies a failed write, turning a unique constraint violation into [`Error::Conflict`].
    ///
    /// Any other database error is kept as [`Error::DbErr`].
    pub fn conflict_on_unique(err: DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message.into()),
            _ => Self::DbErr(err),
        }
    }
}

impl From<MissingFields> for Error {
    fn from(err: MissingFields) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<NullField> for Error {
    fn from(err: NullField) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<InvalidFavorite> for Error {
    fn from(err: InvalidFavorite) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For invalid or incomplete request payloads
/// - 404 Not Found - For ids that do not exist
/// - 405 Method Not Allowed - For a known path requested with another method
/// - 409 Conflict - For duplicate unique values
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => {
                tracing::debug!("Rejected request payload: {}", msg);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { msg })).into_response()
            }
            Self::NotFound(entity) => {
                tracing::debug!("{} not found", entity);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        msg: format!("{} not found", entity),
                    }),
                )
                    .into_response()
            }
            Self::Conflict(msg) => {
                tracing::debug!("Conflict: {}", msg);

                (StatusCode::CONFLICT, Json(ErrorDto { msg })).into_response()
            }
            Self::MethodNotAllowed => {
                tracing::debug!("Method not allowed");

                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    Json(ErrorDto {
                        msg: "Method not allowed".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::DbErr(err)
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                tracing::debug!("Unique constraint violation: {}", err);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        msg: "A record with the same unique value already exists".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
