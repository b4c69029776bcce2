//! Request extractors shared by the controllers.
//!
//! Axum's own `Json` and `Path` extractors answer malformed requests with plain text. The
//! wrappers here reject through [`Error`](crate::server::error::Error) instead, so every
//! failure the API produces has the same `{"msg": ...}` shape.

/// `JsonBody` and `IdPath` extractors.
pub mod extract;
/// JSON answers for requests that match no route.
pub mod fallback;
