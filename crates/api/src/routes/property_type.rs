//! Route definitions for property type master data.

use axum::routing::get;
use axum::Router;

use crate::handlers::property_type;
use crate::state::AppState;

/// Routes mounted at `/property-types`.
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
        .route("/", get(property_type::list).post(property_type::create))
        .route(
            "/{id}",
            get(property_type::get_by_id)
                .put(property_type::update)
                .delete(property_type::delete),
        )
        .route("/{id}/deletable", get(property_type::deletable))
}
