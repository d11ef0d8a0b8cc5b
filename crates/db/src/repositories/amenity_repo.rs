//! Repository for the `amenities` table.

use estatia_core::types::DbId;
use sqlx::PgPool;

use crate::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};

/// Column list for amenities queries.
const COLUMNS: &str = "id, name, icon, created_at, updated_at";

/// CRUD operations for amenity master data.
pub struct AmenityRepo;

impl AmenityRepo {
    /// List all amenities, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Amenity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM amenities ORDER BY name ASC");
        sqlx::query_as::<_, Amenity>(&query).fetch_all(pool).await
    }

    /// Find an amenity by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM amenities WHERE id = $1");
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new amenity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAmenity) -> Result<Amenity, sqlx::Error> {
        let query = format!(
            "INSERT INTO amenities (name, icon)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(&input.name)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// Update an amenity by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAmenity,
    ) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!(
            "UPDATE amenities SET
                name = COALESCE($2, name),
                icon = COALESCE($3, icon),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.icon)
            .fetch_optional(pool)
            .await
    }

    /// Delete an amenity by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM amenities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
