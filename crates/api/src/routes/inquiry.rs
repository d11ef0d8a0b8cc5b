//! Route definitions for contact inquiries.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// Routes mounted at `/inquiries`.
///
/// ```text
/// GET    /            -> list (?unread=&limit=&offset=)
/// POST   /            -> create (public contact form)
/// GET    /{id}        -> get_by_id
/// PUT    /{id}/read   -> mark_read
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inquiry::list).post(inquiry::create))
        .route("/{id}", get(inquiry::get_by_id).delete(inquiry::delete))
        .route("/{id}/read", put(inquiry::mark_read))
}
