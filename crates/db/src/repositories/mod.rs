//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod self_interview_repo;

pub use self_interview_repo::SelfInterviewRepo;
