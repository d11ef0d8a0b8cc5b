//! Handlers for the `/amenities` master-data resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estatia_core::deletion::{check_deletable, DependencyRule};
use estatia_core::error::CoreError;
use estatia_core::types::DbId;
use estatia_db::dependency::ForeignRefCount;
use estatia_db::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};
use estatia_db::repositories::AmenityRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, DeleteCheck};
use crate::state::AppState;

/// Dependency rules blocking amenity deletion.
fn delete_rules<'a>(state: &'a AppState, id: DbId) -> [DependencyRule<ForeignRefCount<'a>>; 1] {
    [
        DependencyRule::new(ForeignRefCount::properties_with_amenity(&state.pool, id))
            .with_message("Cannot delete amenity: it is still attached to properties."),
    ]
}

/// GET /api/v1/amenities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Amenity>>> {
    let amenities = AmenityRepo::list(&state.pool).await?;
    Ok(Json(amenities))
}

/// POST /api/v1/amenities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAmenity>,
) -> AppResult<(StatusCode, Json<Amenity>)> {
    let amenity = AmenityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(amenity)))
}

/// GET /api/v1/amenities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Amenity>> {
    let amenity = AmenityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))?;
    Ok(Json(amenity))
}

/// PUT /api/v1/amenities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAmenity>,
) -> AppResult<Json<Amenity>> {
    let amenity = AmenityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))?;
    Ok(Json(amenity))
}

/// DELETE /api/v1/amenities/{id}
///
/// Refused while the amenity is still linked to any property.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let candidate = AmenityRepo::find_by_id(&state.pool, id).await?;
    let rules = delete_rules(&state, id);
    check_deletable(candidate.as_ref(), &rules).await?;

    let deleted = AmenityRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::RecordNotFound);
    }

    tracing::info!(amenity_id = id, "Amenity deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/amenities/{id}/deletable
pub async fn deletable(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeleteCheck>>> {
    let candidate = AmenityRepo::find_by_id(&state.pool, id).await?;
    let rules = delete_rules(&state, id);
    let check = super::guard_preview(candidate.as_ref(), &rules).await?;
    Ok(Json(DataResponse { data: check }))
}
