//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `pickme_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod health;
pub mod self_interview;
