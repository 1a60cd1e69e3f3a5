//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` DTO accepted at the API boundary
//! - A `Serialize` response struct for the wire representation

pub mod self_interview;
