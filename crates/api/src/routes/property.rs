//! Route definitions for property listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// Routes mounted at `/properties`.
///
/// ```text
/// GET    /                 -> list (filters + pagination)
/// POST   /                 -> create
/// GET    /slug/{slug}      -> get_by_slug (public)
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete (guarded)
/// GET    /{id}/deletable   -> deletable
/// GET    /{id}/amenities   -> amenities
/// PUT    /{id}/amenities   -> set_amenities
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(property::list).post(property::create))
        .route("/slug/{slug}", get(property::get_by_slug))
        .route(
            "/{id}",
            get(property::get_by_id)
                .put(property::update)
                .delete(property::delete),
        )
        .route("/{id}/deletable", get(property::deletable))
        .route(
            "/{id}/amenities",
            get(property::amenities).put(property::set_amenities),
        )
}
