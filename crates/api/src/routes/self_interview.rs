//! Route definitions for the `/selfInterviews` resource.

use axum::routing::get;
use axum::Router;
use pickme_core::types::DbId;

use crate::handlers::self_interview;
use crate::state::AppState;

/// Public path of the collection, including the `/api` prefix.
pub const BASE_PATH: &str = "/api/selfInterviews";

/// Href of the collection (trailing slash, as clients post to it).
pub fn collection_href() -> String {
    format!("{BASE_PATH}/")
}

/// Href of a single self-interview.
pub fn item_href(id: DbId) -> String {
    format!("{BASE_PATH}/{id}")
}

/// Routes merged under `/api`.
///
/// ```text
/// GET    /selfInterviews        -> list
/// POST   /selfInterviews        -> create
/// GET    /selfInterviews/       -> list
/// POST   /selfInterviews/       -> create
/// GET    /selfInterviews/{id}   -> get_by_id
/// PUT    /selfInterviews/{id}   -> update
/// DELETE /selfInterviews/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/selfInterviews",
            get(self_interview::list).post(self_interview::create),
        )
        .route(
            "/selfInterviews/",
            get(self_interview::list).post(self_interview::create),
        )
        .route(
            "/selfInterviews/{id}",
            get(self_interview::get_by_id)
                .put(self_interview::update)
                .delete(self_interview::delete),
        )
}
