//! Service layer for business logic.
//!
//! One service per resource. Services turn validated payloads into repository calls,
//! hash passwords, check references between records, and translate database failures into
//! the domain errors of [`crate::server::error::Error`]. They return DTOs so that stored
//! records never leave the server unprojected.

/// Character creation, lookup, update and deletion.
pub mod character;
/// Favorites, checked against existing users, planets and characters.
pub mod favorite;
/// Planet creation, lookup, update and deletion.
pub mod planet;
/// User registration and lookup.
pub mod user;
