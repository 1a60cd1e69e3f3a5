//! pickme API server library.
//!
//! Exposes the core building blocks (config, state, error handling, HAL
//! envelope, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod hal;
pub mod handlers;
pub mod routes;
pub mod state;
