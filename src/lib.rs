//! Library crate for esports-registry, exposing modules for binaries and integration tests.

pub mod config;
/// Request and response payloads.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// axum routers and handlers.
pub mod routes;
/// Business operations called by the handlers.
pub mod services;
/// In-memory domain state.
pub mod state;
