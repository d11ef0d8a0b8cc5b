//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// Wraps a serializable payload for endpoints that return derived data
/// rather than a bare entity.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Outcome payload of a `GET /{id}/deletable` pre-check.
///
/// Lets an admin UI disable its delete button before the user clicks it.
#[derive(Debug, Serialize)]
pub struct DeleteCheck {
    /// Whether a delete issued now would be accepted.
    pub deletable: bool,
    /// Why not, when `deletable` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
