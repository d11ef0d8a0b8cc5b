//! Handlers for the `/pages` CMS resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estatia_core::error::CoreError;
use estatia_core::types::DbId;
use estatia_db::models::page::{CreatePage, Page, UpdatePage};
use estatia_db::repositories::PageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/pages
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Page>>> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(Json(pages))
}

/// POST /api/v1/pages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePage>,
) -> AppResult<(StatusCode, Json<Page>)> {
    let page = PageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// GET /api/v1/pages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Page>> {
    let page = PageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;
    Ok(Json(page))
}

/// GET /api/v1/pages/slug/{slug}
///
/// Public lookup used by the site front-end (home, about, contact, ...).
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Page>> {
    let page = PageRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::RecordNotFound)?;
    Ok(Json(page))
}

/// PUT /api/v1/pages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePage>,
) -> AppResult<Json<Page>> {
    let page = PageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;
    Ok(Json(page))
}

/// DELETE /api/v1/pages/{id}
///
/// Nothing references pages, so this delete is unguarded.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Page", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
