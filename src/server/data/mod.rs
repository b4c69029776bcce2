//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so the
//! same queries run on a pooled connection, inside a transaction, or against the in-memory
//! SQLite database used by tests. They return SeaORM models and [`sea_orm::DbErr`] and leave
//! HTTP semantics to the service layer.

/// Character table access.
pub mod character;
/// Favorite table access.
pub mod favorite;
/// Planet table access.
pub mod planet;
/// User table access.
pub mod user;
