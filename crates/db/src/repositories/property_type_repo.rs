//! Repository for the `property_types` table.

use estatia_core::types::DbId;
use sqlx::PgPool;

use crate::models::property_type::{CreatePropertyType, PropertyType, UpdatePropertyType};

/// Column list for property_types queries.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// CRUD operations for property type master data.
pub struct PropertyTypeRepo;

impl PropertyTypeRepo {
    /// List all property types, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<PropertyType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property_types ORDER BY name ASC");
        sqlx::query_as::<_, PropertyType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a property type by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PropertyType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property_types WHERE id = $1");
        sqlx::query_as::<_, PropertyType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new property type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePropertyType,
    ) -> Result<PropertyType, sqlx::Error> {
        let query = format!(
            "INSERT INTO property_types (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Update a property type by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePropertyType,
    ) -> Result<Option<PropertyType>, sqlx::Error> {
        let query = format!(
            "UPDATE property_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a property type by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM property_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
