//! Repository for the `inquiries` table.

use estatia_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use estatia_core::types::DbId;
use sqlx::PgPool;

use crate::models::inquiry::{CreateInquiry, Inquiry};

/// Column list for inquiries queries.
const COLUMNS: &str = "id, name, email, phone, message, property_id, is_read, created_at";

/// Operations for contact-form inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// List inquiries, newest first, optionally restricted to unread ones.
    pub async fn list(
        pool: &PgPool,
        unread_only: bool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Inquiry>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);

        let query = format!(
            "SELECT {COLUMNS} FROM inquiries
             WHERE ($1 = FALSE OR is_read = FALSE)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(unread_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find an inquiry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Store a contact-form submission, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (name, email, phone, message, property_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(input.property_id)
            .fetch_one(pool)
            .await
    }

    /// Mark an inquiry as read, returning the updated row.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE inquiries SET is_read = TRUE WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inquiry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
