//! Handlers for the `/property-types` master-data resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estatia_core::deletion::{check_deletable, DependencyRule};
use estatia_core::error::CoreError;
use estatia_core::types::DbId;
use estatia_db::dependency::ForeignRefCount;
use estatia_db::models::property_type::{CreatePropertyType, PropertyType, UpdatePropertyType};
use estatia_db::repositories::PropertyTypeRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, DeleteCheck};
use crate::state::AppState;

/// Dependency rules blocking property type deletion.
fn delete_rules<'a>(state: &'a AppState, id: DbId) -> [DependencyRule<ForeignRefCount<'a>>; 1] {
    [
        DependencyRule::new(ForeignRefCount::properties_of_type(&state.pool, id))
            .with_message("Cannot delete property type: properties of this type still exist."),
    ]
}

/// GET /api/v1/property-types
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PropertyType>>> {
    let property_types = PropertyTypeRepo::list(&state.pool).await?;
    Ok(Json(property_types))
}

/// POST /api/v1/property-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePropertyType>,
) -> AppResult<(StatusCode, Json<PropertyType>)> {
    let property_type = PropertyTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(property_type)))
}

/// GET /api/v1/property-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PropertyType>> {
    let property_type = PropertyTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PropertyType",
            id,
        }))?;
    Ok(Json(property_type))
}

/// PUT /api/v1/property-types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePropertyType>,
) -> AppResult<Json<PropertyType>> {
    let property_type = PropertyTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PropertyType",
            id,
        }))?;
    Ok(Json(property_type))
}

/// DELETE /api/v1/property-types/{id}
///
/// Refused while any property still references the type.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let candidate = PropertyTypeRepo::find_by_id(&state.pool, id).await?;
    let rules = delete_rules(&state, id);
    check_deletable(candidate.as_ref(), &rules).await?;

    let deleted = PropertyTypeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::RecordNotFound);
    }

    tracing::info!(property_type_id = id, "Property type deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/property-types/{id}/deletable
pub async fn deletable(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeleteCheck>>> {
    let candidate = PropertyTypeRepo::find_by_id(&state.pool, id).await?;
    let rules = delete_rules(&state, id);
    let check = super::guard_preview(candidate.as_ref(), &rules).await?;
    Ok(Json(DataResponse { data: check }))
}
