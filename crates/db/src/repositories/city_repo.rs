//! Repository for the `cities` table.

use estatia_core::naming::slugify;
use estatia_core::types::DbId;
use sqlx::PgPool;

use crate::models::city::{City, CreateCity, UpdateCity};

/// Column list for cities queries.
const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// CRUD operations for city master data.
pub struct CityRepo;

impl CityRepo {
    /// List all cities, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities ORDER BY name ASC");
        sqlx::query_as::<_, City>(&query).fetch_all(pool).await
    }

    /// Find a city by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new city, returning the created row.
    ///
    /// The slug is derived from the name unless supplied explicitly.
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let slug = input.slug.clone().unwrap_or_else(|| slugify(&input.name));
        let query = format!(
            "INSERT INTO cities (name, slug)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(&input.name)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Update a city by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!(
            "UPDATE cities SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a city by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
