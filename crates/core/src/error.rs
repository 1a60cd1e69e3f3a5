use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Client-facing message for a missing entity, e.g. `self-interview not found`.
    ///
    /// The id is left out so every lookup miss for an entity produces the
    /// same message.
    pub fn not_found_message(entity: &str) -> String {
        format!("{entity} not found")
    }
}
