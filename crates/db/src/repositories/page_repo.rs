//! Repository for the `pages` table (CMS content).

use estatia_core::naming::slugify;
use estatia_core::types::DbId;
use sqlx::PgPool;

use crate::models::page::{CreatePage, Page, UpdatePage};

/// Column list for pages queries.
const COLUMNS: &str = "id, slug, title, body, meta_title, meta_description, \
                       created_at, updated_at";

/// CRUD operations for CMS pages.
pub struct PageRepo;

impl PageRepo {
    /// List all pages, ordered by slug ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages ORDER BY slug ASC");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    /// Find a page by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a page by its public slug (what the site front-end fetches).
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Create a new page, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePage) -> Result<Page, sqlx::Error> {
        let slug = input.slug.clone().unwrap_or_else(|| slugify(&input.title));
        let query = format!(
            "INSERT INTO pages (slug, title, body, meta_title, meta_description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .fetch_one(pool)
            .await
    }

    /// Update a page by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                body = COALESCE($4, body),
                meta_title = COALESCE($5, meta_title),
                meta_description = COALESCE($6, meta_description),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a page by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
