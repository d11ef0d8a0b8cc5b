//! Contact inquiry entity and DTOs.

use estatia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Listing the inquiry was filed against, if any.
    pub property_id: Option<DbId>,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for the public contact form.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInquiry {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
    pub property_id: Option<DbId>,
}
