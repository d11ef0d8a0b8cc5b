//! Property listing entity and DTOs.

use estatia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    /// Asking price in minor currency units.
    pub price: i64,
    pub area_sqm: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub address: Option<String>,
    pub status: String,
    pub listing_kind: String,
    pub city_id: DbId,
    pub property_type_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a listing.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProperty {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Derived from `title` when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price: i64,
    pub area_sqm: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub address: Option<String>,
    /// Defaults to `draft` when omitted.
    pub status: Option<String>,
    pub listing_kind: String,
    pub city_id: DbId,
    pub property_type_id: DbId,
}

/// DTO for updating a listing.
#[derive(Debug, Deserialize)]
pub struct UpdateProperty {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub area_sqm: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub listing_kind: Option<String>,
    pub city_id: Option<DbId>,
    pub property_type_id: Option<DbId>,
}

/// Filters accepted by the listing index (`GET /properties`).
#[derive(Debug, Deserialize)]
pub struct PropertyFilter {
    pub city_id: Option<DbId>,
    pub property_type_id: Option<DbId>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
