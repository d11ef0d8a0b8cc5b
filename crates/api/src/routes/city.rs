//! Route definitions for city master data.

use axum::routing::get;
use axum::Router;

use crate::handlers::city;
use crate::state::AppState;

/// Routes mounted at `/cities`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete (guarded)
/// GET    /{id}/deletable   -> deletable
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(city::list).post(city::create))
        .route(
            "/{id}",
            get(city::get_by_id).put(city::update).delete(city::delete),
        )
        .route("/{id}/deletable", get(city::deletable))
}
