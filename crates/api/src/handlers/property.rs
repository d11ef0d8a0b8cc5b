//! Handlers for the `/properties` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use estatia_core::deletion::{check_deletable, DependencyRule};
use estatia_core::error::CoreError;
use estatia_core::listing;
use estatia_core::types::DbId;
use estatia_db::dependency::ForeignRefCount;
use estatia_db::models::amenity::Amenity;
use estatia_db::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};
use estatia_db::repositories::PropertyRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, DeleteCheck};
use crate::state::AppState;

/// Dependency rules blocking property deletion, inquiries first so the
/// more actionable conflict surfaces before the link-table one.
fn delete_rules<'a>(state: &'a AppState, id: DbId) -> [DependencyRule<ForeignRefCount<'a>>; 2] {
    [
        DependencyRule::new(ForeignRefCount::inquiries_for_property(&state.pool, id))
            .with_message("Cannot delete property: inquiries reference it."),
        DependencyRule::new(ForeignRefCount::amenity_links_for_property(&state.pool, id))
            .with_message("Cannot delete property: detach its amenities first."),
    ]
}

/// Verify that a listing exists, returning NotFound if it does not.
async fn ensure_property_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if !PropertyRepo::verify_exists(pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }));
    }
    Ok(())
}

/// GET /api/v1/properties
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> AppResult<Json<Vec<Property>>> {
    if let Some(status) = &filter.status {
        listing::validate_status(status).map_err(CoreError::Validation)?;
    }
    let properties = PropertyRepo::list(&state.pool, &filter).await?;
    Ok(Json(properties))
}

/// POST /api/v1/properties
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProperty>,
) -> AppResult<(StatusCode, Json<Property>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    if let Some(status) = &input.status {
        listing::validate_status(status).map_err(CoreError::Validation)?;
    }
    listing::validate_kind(&input.listing_kind).map_err(CoreError::Validation)?;

    let property = PropertyRepo::create(&state.pool, &input).await?;
    tracing::info!(property_id = property.id, "Property created");
    Ok((StatusCode::CREATED, Json(property)))
}

/// GET /api/v1/properties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;
    Ok(Json(property))
}

/// GET /api/v1/properties/slug/{slug}
///
/// Public lookup used by the listing detail page.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::RecordNotFound)?;
    Ok(Json(property))
}

/// PUT /api/v1/properties/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProperty>,
) -> AppResult<Json<Property>> {
    if let Some(status) = &input.status {
        listing::validate_status(status).map_err(CoreError::Validation)?;
    }
    if let Some(kind) = &input.listing_kind {
        listing::validate_kind(kind).map_err(CoreError::Validation)?;
    }

    let property = PropertyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;
    Ok(Json(property))
}

/// DELETE /api/v1/properties/{id}
///
/// Refused while inquiries reference the listing or amenity links exist.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let candidate = PropertyRepo::find_by_id(&state.pool, id).await?;
    let rules = delete_rules(&state, id);
    check_deletable(candidate.as_ref(), &rules).await?;

    let deleted = PropertyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::RecordNotFound);
    }

    tracing::info!(property_id = id, "Property deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/properties/{id}/deletable
pub async fn deletable(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeleteCheck>>> {
    let candidate = PropertyRepo::find_by_id(&state.pool, id).await?;
    let rules = delete_rules(&state, id);
    let check = super::guard_preview(candidate.as_ref(), &rules).await?;
    Ok(Json(DataResponse { data: check }))
}

/// GET /api/v1/properties/{id}/amenities
pub async fn amenities(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Amenity>>> {
    ensure_property_exists(&state.pool, id).await?;
    let amenities = PropertyRepo::amenities(&state.pool, id).await?;
    Ok(Json(amenities))
}

/// Request body for replacing a listing's amenity links.
#[derive(Debug, Deserialize)]
pub struct SetAmenities {
    pub amenity_ids: Vec<DbId>,
}

/// PUT /api/v1/properties/{id}/amenities
///
/// Replaces the whole link set and returns the resulting amenity list.
pub async fn set_amenities(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetAmenities>,
) -> AppResult<Json<Vec<Amenity>>> {
    ensure_property_exists(&state.pool, id).await?;
    PropertyRepo::set_amenities(&state.pool, id, &input.amenity_ids).await?;
    let amenities = PropertyRepo::amenities(&state.pool, id).await?;
    Ok(Json(amenities))
}
