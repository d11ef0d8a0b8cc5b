//! Handlers for the `/inquiries` resource (public contact form + admin).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use estatia_core::error::CoreError;
use estatia_core::types::DbId;
use estatia_db::models::inquiry::{CreateInquiry, Inquiry};
use estatia_db::repositories::{InquiryRepo, PropertyRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{PaginationParams, UnreadParams};
use crate::state::AppState;

/// POST /api/v1/inquiries
///
/// Public endpoint backing the contact form.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInquiry>,
) -> AppResult<(StatusCode, Json<Inquiry>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    // A dangling property_id would only surface as an FK violation deep
    // in the insert; reject it up front with a clear message instead.
    if let Some(property_id) = input.property_id {
        if !PropertyRepo::verify_exists(&state.pool, property_id).await? {
            return Err(AppError::BadRequest(format!(
                "property_id {property_id} does not reference an existing property"
            )));
        }
    }

    let inquiry = InquiryRepo::create(&state.pool, &input).await?;
    tracing::info!(inquiry_id = inquiry.id, "Inquiry received");
    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// GET /api/v1/inquiries
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PaginationParams>,
    Query(filter): Query<UnreadParams>,
) -> AppResult<Json<Vec<Inquiry>>> {
    let inquiries =
        InquiryRepo::list(&state.pool, filter.unread, page.limit, page.offset).await?;
    Ok(Json(inquiries))
}

/// GET /api/v1/inquiries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Inquiry>> {
    let inquiry = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }))?;
    Ok(Json(inquiry))
}

/// PUT /api/v1/inquiries/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Inquiry>> {
    let inquiry = InquiryRepo::mark_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }))?;
    Ok(Json(inquiry))
}

/// DELETE /api/v1/inquiries/{id}
///
/// Nothing references inquiries, so this delete is unguarded.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InquiryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
