//! Database model type aliases.
//!
//! Short names for the SeaORM entity models of the `entity` crate.

/// A registered user, see [`entity::user::Model`].
///
/// `password` holds an Argon2id PHC string, never the plaintext.
pub type UserModel = entity::user::Model;

/// A planet record, see [`entity::planet::Model`].
pub type PlanetModel = entity::planet::Model;

/// A character record, see [`entity::character::Model`].
pub type CharacterModel = entity::character::Model;

/// A user's favorite, see [`entity::favorite::Model`].
///
/// `favorite_id` refers to a planet or a character depending on `type`.
pub type FavoriteModel = entity::favorite::Model;
