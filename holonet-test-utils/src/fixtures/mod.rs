//! Test fixture modules for database records and request payloads.
//!
//! Each record submodule adds an accessor on [`TestContext`](crate::TestContext) returning a
//! fixture helper that inserts rows directly through the entity crate:
//!
//! - `user` - Users with a placeholder password hash
//! - `planet` - Planets with fixed terrain and orbit values
//! - `character` - Characters with fixed appearance values
//! - `favorite` - Favorite rows pointing at any ID
//!
//! `factory` builds JSON bodies for the HTTP endpoints.

pub mod character;
pub mod factory;
pub mod favorite;
pub mod planet;
pub mod user;
