//! Domain types shared by the pickme crates.
//!
//! This crate has no IO dependencies so it can be used by the repository
//! layer, the API server and tests alike.

pub mod error;
pub mod self_interview;
pub mod types;
