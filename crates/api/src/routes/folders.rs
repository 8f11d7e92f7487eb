//! Route definitions for the `/folders` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::folders;
use crate::state::AppState;

/// Routes mounted at `/api/folders`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(folders::list).post(folders::create))
        .route(
            "/{id}",
            get(folders::get_by_id).put(folders::update).delete(folders::delete),
        )
}
