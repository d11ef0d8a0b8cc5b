//! City master data.

use estatia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new city.
#[derive(Debug, Deserialize)]
pub struct CreateCity {
    pub name: String,
    /// Derived from `name` when omitted.
    pub slug: Option<String>,
}

/// DTO for updating a city.
#[derive(Debug, Deserialize)]
pub struct UpdateCity {
    pub name: Option<String>,
    pub slug: Option<String>,
}
