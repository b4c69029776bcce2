use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub msg: String,
}

/// A response carrying only a message, e.g. after a deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

/// A single entry of the route listing served at `/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    pub method: String,
    pub path: String,
}

/// Listing of every API route, served at `/`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub msg: String,
    pub routes: Vec<RouteDto>,
}

/// Required fields that were absent or `null` in a create payload.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

impl MissingFields {
    /// Collects the names of every field whose check reports it as missing.
    pub fn from_checks(checks: &[(&'static str, bool)]) -> Self {
        Self(
            checks
                .iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| *name)
                .collect(),
        )
    }
}

/// A field of an update payload that was given as `null`.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Field '{0}' cannot be null")]
pub struct NullField(pub &'static str);

/// Deserializes a field that is present in the payload as `Some`, keeping `null` distinguishable.
///
/// Used together with `#[serde(default)]`: an absent key stays `None`, `"key": null` becomes
/// `Some(None)` and `"key": value` becomes `Some(Some(value))`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Unwraps a present update field, rejecting an explicit `null`.
pub(crate) fn non_null<T>(
    field: &'static str,
    value: Option<Option<T>>,
) -> Result<Option<T>, NullField> {
    match value {
        None => Ok(None),
        Some(None) => Err(NullField(field)),
        Some(Some(value)) => Ok(Some(value)),
    }
}
