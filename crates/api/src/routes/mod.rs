pub mod folders;
pub mod health;
pub mod notes;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /folders                 list, create
/// /folders/{id}            get, update, delete
///
/// /notes                   list (?searchTerm=&folderId=), create
/// /notes/{id}              get, update, delete
///
/// /tags                    list, create
/// /tags/{id}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/folders", folders::router())
        .nest("/notes", notes::router())
        .nest("/tags", tags::router())
}
