//! Route definitions for `/videos`.

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Routes mounted at `/videos`.
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
        .route("/", get(videos::list).post(videos::create))
        .route(
            "/{id}",
            get(videos::get_by_id)
                .put(videos::update)
                .delete(videos::delete),
        )
}
