//! Handlers for the `/cities` master-data resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estatia_core::deletion::{check_deletable, DependencyRule};
use estatia_core::error::CoreError;
use estatia_core::types::DbId;
use estatia_db::dependency::ForeignRefCount;
use estatia_db::models::city::{City, CreateCity, UpdateCity};
use estatia_db::repositories::CityRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, DeleteCheck};
use crate::state::AppState;

/// Dependency rules blocking city deletion.
fn delete_rules<'a>(state: &'a AppState, id: DbId) -> [DependencyRule<ForeignRefCount<'a>>; 1] {
    [
        DependencyRule::new(ForeignRefCount::properties_in_city(&state.pool, id))
            .with_message("Cannot delete city: properties are still assigned to it."),
    ]
}

/// GET /api/v1/cities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<City>>> {
    let cities = CityRepo::list(&state.pool).await?;
    Ok(Json(cities))
}

/// POST /api/v1/cities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCity>,
) -> AppResult<(StatusCode, Json<City>)> {
    let city = CityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(city)))
}

/// GET /api/v1/cities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<City>> {
    let city = CityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;
    Ok(Json(city))
}

/// PUT /api/v1/cities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCity>,
) -> AppResult<Json<City>> {
    let city = CityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;
    Ok(Json(city))
}

/// DELETE /api/v1/cities/{id}
///
/// Refused while any property is still assigned to the city.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let candidate = CityRepo::find_by_id(&state.pool, id).await?;
    let rules = delete_rules(&state, id);
    check_deletable(candidate.as_ref(), &rules).await?;

    let deleted = CityRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::RecordNotFound);
    }

    tracing::info!(city_id = id, "City deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/cities/{id}/deletable
pub async fn deletable(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeleteCheck>>> {
    let candidate = CityRepo::find_by_id(&state.pool, id).await?;
    let rules = delete_rules(&state, id);
    let check = super::guard_preview(candidate.as_ref(), &rules).await?;
    Ok(Json(DataResponse { data: check }))
}
