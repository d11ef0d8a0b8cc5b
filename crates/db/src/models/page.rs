//! CMS page entity and DTOs (home, about, contact, terms, ...).

use estatia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a page.
#[derive(Debug, Deserialize)]
pub struct CreatePage {
    /// Derived from `title` when omitted.
    pub slug: Option<String>,
    pub title: String,
    pub body: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

/// DTO for updating a page.
#[derive(Debug, Deserialize)]
pub struct UpdatePage {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}
