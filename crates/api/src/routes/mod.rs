pub mod cast_members;
pub mod categories;
pub mod genres;
pub mod health;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories              list, create
/// /categories/{id}         get, update, delete
/// /genres                  list, create
/// /genres/{id}             get (with categories), update, delete
/// /cast_members            list, create
/// /cast_members/{id}       get, update, delete
/// /videos                  list, create
/// /videos/{id}             get (with categories, genres), update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/genres", genres::router())
        .nest("/cast_members", cast_members::router())
        .nest("/videos", videos::router())
}
