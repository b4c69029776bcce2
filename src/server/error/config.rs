use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while building [`Config`](crate::server::config::Config) from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
