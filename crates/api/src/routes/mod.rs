pub mod health;
pub mod self_interview;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /selfInterviews                                  list, create
/// /selfInterviews/                                 list, create
/// /selfInterviews/{id}                             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(self_interview::router())
}
