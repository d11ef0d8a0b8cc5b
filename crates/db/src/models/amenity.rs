//! Amenity master data ("Pool", "Parking", ...).

use estatia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `amenities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Amenity {
    pub id: DbId,
    pub name: String,
    pub icon: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new amenity.
#[derive(Debug, Deserialize)]
pub struct CreateAmenity {
    pub name: String,
    pub icon: Option<String>,
}

/// DTO for updating an amenity.
#[derive(Debug, Deserialize)]
pub struct UpdateAmenity {
    pub name: Option<String>,
    pub icon: Option<String>,
}
