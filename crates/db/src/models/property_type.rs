//! Property type master data ("Apartment", "Villa", ...).

use estatia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `property_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new property type.
#[derive(Debug, Deserialize)]
pub struct CreatePropertyType {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a property type.
#[derive(Debug, Deserialize)]
pub struct UpdatePropertyType {
    pub name: Option<String>,
    pub description: Option<String>,
}
