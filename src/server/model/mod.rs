//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler and type
//! aliases for the SeaORM entity models.

/// Application state shared by every handler.
pub mod app;
pub mod db;
