//! Request and response payloads shared by the HTTP layer.
//!
//! Response DTOs are the public projection of the database records: converting a
//! record into its DTO is the only way records leave the server, which keeps
//! write-only fields such as the user password out of every response.
//! Create payloads hold every field as optional so that missing or `null`
//! values can be reported together instead of failing on the first one.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
