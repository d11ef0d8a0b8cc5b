//! Tests for the delete-guard -> `AppError` -> HTTP translation.
//!
//! The guard lives in `estatia_core::deletion` and knows nothing about
//! HTTP; these tests pin down the bridge: each `DeleteBlocked` outcome
//! must reach the wire with the status its `status_hint` promises.

use assert_matches::assert_matches;
use axum::response::IntoResponse;
use estatia_api::error::AppError;
use estatia_core::deletion::DeleteBlocked;
use http_body_util::BodyExt;

async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: a missing candidate becomes 404 "Record not found"
// ---------------------------------------------------------------------------

#[tokio::test]
async fn guard_not_found_maps_to_404_record_not_found() {
    let blocked: DeleteBlocked<sqlx::Error> = DeleteBlocked::NotFound;
    assert_eq!(blocked.status_hint(), 404);

    let err = AppError::from(blocked);
    assert_matches!(err, AppError::RecordNotFound);

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Record not found");
}

// ---------------------------------------------------------------------------
// Test: a violated dependency becomes 400 carrying the rule's message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn guard_conflict_maps_to_400_with_rule_message() {
    let blocked: DeleteBlocked<sqlx::Error> =
        DeleteBlocked::Conflict("Cannot delete city: properties are still assigned to it.".into());
    assert_eq!(blocked.status_hint(), 400);

    let err = AppError::from(blocked);
    assert_matches!(err, AppError::BadRequest(_));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(
        json["error"],
        "Cannot delete city: properties are still assigned to it."
    );
}

// ---------------------------------------------------------------------------
// Test: a failing count query joins the regular sqlx classification path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn guard_query_error_maps_to_sqlx_classification() {
    let blocked = DeleteBlocked::Query(sqlx::Error::PoolTimedOut);

    let err = AppError::from(blocked);
    assert_matches!(err, AppError::Database(sqlx::Error::PoolTimedOut));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
