//! Handlers for the `/api/selfInterviews` resource.
//!
//! Missing ids are reported as `400 {"message": "self-interview not found"}`
//! on every verb that takes an id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pickme_core::error::CoreError;
use pickme_core::self_interview;
use pickme_core::types::DbId;
use pickme_db::models::self_interview::{SelfInterview, SelfInterviewDto, SelfInterviewResponse};
use pickme_db::repositories::SelfInterviewRepo;

use crate::error::{AppError, AppResult};
use crate::hal::{Hal, HalCollection, HalResource};
use crate::routes::self_interview::{collection_href, item_href};
use crate::state::AppState;

/// Relation name for the embedded list in collection responses.
const COLLECTION_REL: &str = "selfInterviews";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: self_interview::ENTITY,
        id,
    })
}

/// Map a stored row to its HAL representation.
fn to_resource(entity: SelfInterview) -> HalResource<SelfInterviewResponse> {
    let href = item_href(entity.id);
    HalResource::new(SelfInterviewResponse::from(entity))
        .with_link("self", href.clone())
        .with_link("update-self-interview", href.clone())
        .with_link("delete-self-interview", href)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/selfInterviews/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SelfInterviewDto>,
) -> AppResult<impl IntoResponse> {
    self_interview::validate_fields(&input.title, &input.content)?;

    let created = SelfInterviewRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, "Self-interview created");
    Ok((StatusCode::CREATED, Hal(to_resource(created))))
}

/// GET /api/selfInterviews/
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = SelfInterviewRepo::list(&state.pool).await?;
    tracing::debug!(count = rows.len(), "Listed self-interviews");

    let items = rows.into_iter().map(to_resource).collect();
    Ok(Hal(HalCollection::new(COLLECTION_REL, items, collection_href())))
}

/// GET /api/selfInterviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = SelfInterviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Hal(to_resource(found)))
}

/// PUT /api/selfInterviews/{id}
///
/// Replaces title and content. The existence check runs before validation
/// so an unknown id always yields the not-found message.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SelfInterviewDto>,
) -> AppResult<impl IntoResponse> {
    SelfInterviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    self_interview::validate_fields(&input.title, &input.content)?;

    let updated = SelfInterviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Self-interview updated");
    Ok(Hal(to_resource(updated)))
}

/// DELETE /api/selfInterviews/{id}
///
/// Responds with the removed record.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SelfInterviewResponse>> {
    let deleted = SelfInterviewRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Self-interview deleted");
    Ok(Json(SelfInterviewResponse::from(deleted)))
}
