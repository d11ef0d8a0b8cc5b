//! Route definitions for CMS pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::page;
use crate::state::AppState;

/// Routes mounted at `/pages`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /slug/{slug}   -> get_by_slug (public)
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::list).post(page::create))
        .route("/slug/{slug}", get(page::get_by_slug))
        .route(
            "/{id}",
            get(page::get_by_id).put(page::update).delete(page::delete),
        )
}
