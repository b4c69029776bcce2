//! HTTP controller endpoints for the Holonet web API.
//!
//! One Axum handler per resource and operation. Controllers extract and validate the request,
//! call the matching service, and turn the result into a JSON response. Failures are returned
//! as [`Error`](crate::server::error::Error), which renders itself. Every handler carries a
//! utoipa annotation so the OpenAPI document and the route listing stay in sync with the router.

/// `/character` endpoints.
pub mod character;
/// `/favorites` and `/favorite` endpoints.
pub mod favorite;
/// `/planet` endpoints.
pub mod planet;
/// Route listing served at `/`.
pub mod sitemap;
/// `/user` endpoints.
pub mod user;
pub mod util;
