//! Server application core modules.
//!
//! This module contains all server-side functionality for Holonet: HTTP routing, request
//! handlers, the per-entity services and repositories, configuration, and error handling.
//! Requests flow from the router to a controller, which calls a service, which reads and
//! writes the database through a repository.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
/// Tracing and database initialization run once at launch.
pub mod startup;
pub mod util;
