//! Holonet: a JSON REST API for users, planets, characters and favorites.

pub mod model;
pub mod server;
