//! Self-interview entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use pickme_core::types::{DbId, Timestamp};

/// A self-interview row from the `self_interviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SelfInterview {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a self-interview.
///
/// Update uses the same shape: both fields are written, so a client that
/// only wants to change `content` sends the current `title` back.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelfInterviewDto {
    pub title: String,
    pub content: String,
}

/// Wire representation of a stored self-interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfInterviewResponse {
    pub id: DbId,
    pub title: String,
    pub content: String,
}

impl From<SelfInterview> for SelfInterviewResponse {
    fn from(entity: SelfInterview) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
        }
    }
}

impl From<&SelfInterview> for SelfInterviewDto {
    fn from(entity: &SelfInterview) -> Self {
        Self {
            title: entity.title.clone(),
            content: entity.content.clone(),
        }
    }
}
