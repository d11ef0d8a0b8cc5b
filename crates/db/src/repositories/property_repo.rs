//! Repository for the `properties` table and its amenity links.

use estatia_core::listing::STATUS_DRAFT;
use estatia_core::naming::slugify;
use estatia_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use estatia_core::types::DbId;
use sqlx::PgPool;

use crate::models::amenity::Amenity;
use crate::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};

/// Column list for properties queries.
const COLUMNS: &str = "id, title, slug, description, price, area_sqm, bedrooms, bathrooms, \
                       address, status, listing_kind, city_id, property_type_id, \
                       created_at, updated_at";

/// CRUD operations for property listings.
pub struct PropertyRepo;

impl PropertyRepo {
    /// List listings matching the filter, newest first, paginated.
    ///
    /// Absent filter fields match everything.
    pub async fn list(
        pool: &PgPool,
        filter: &PropertyFilter,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let limit = clamp_limit(filter.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(filter.offset);

        let query = format!(
            "SELECT {COLUMNS} FROM properties
             WHERE ($1::bigint IS NULL OR city_id = $1)
               AND ($2::bigint IS NULL OR property_type_id = $2)
               AND ($3::text IS NULL OR status = $3)
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(filter.city_id)
            .bind(filter.property_type_id)
            .bind(&filter.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a listing by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a listing by its public slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE slug = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a listing exists without fetching the row.
    pub async fn verify_exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM properties WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Create a new listing, returning the created row.
    ///
    /// The slug is derived from the title unless supplied explicitly;
    /// status defaults to draft.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let slug = input.slug.clone().unwrap_or_else(|| slugify(&input.title));
        let status = input.status.as_deref().unwrap_or(STATUS_DRAFT);
        let query = format!(
            "INSERT INTO properties (title, slug, description, price, area_sqm, bedrooms,
                                     bathrooms, address, status, listing_kind, city_id,
                                     property_type_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.area_sqm)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(&input.address)
            .bind(status)
            .bind(&input.listing_kind)
            .bind(input.city_id)
            .bind(input.property_type_id)
            .fetch_one(pool)
            .await
    }

    /// Update a listing by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                area_sqm = COALESCE($6, area_sqm),
                bedrooms = COALESCE($7, bedrooms),
                bathrooms = COALESCE($8, bathrooms),
                address = COALESCE($9, address),
                status = COALESCE($10, status),
                listing_kind = COALESCE($11, listing_kind),
                city_id = COALESCE($12, city_id),
                property_type_id = COALESCE($13, property_type_id),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.area_sqm)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(&input.address)
            .bind(&input.status)
            .bind(&input.listing_kind)
            .bind(input.city_id)
            .bind(input.property_type_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a listing by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Amenities attached to a listing, ordered by name.
    pub async fn amenities(pool: &PgPool, property_id: DbId) -> Result<Vec<Amenity>, sqlx::Error> {
        sqlx::query_as::<_, Amenity>(
            "SELECT a.id, a.name, a.icon, a.created_at, a.updated_at
             FROM amenities a
             JOIN property_amenities pa ON pa.amenity_id = a.id
             WHERE pa.property_id = $1
             ORDER BY a.name ASC",
        )
        .bind(property_id)
        .fetch_all(pool)
        .await
    }

    /// Replace a listing's amenity links with the given set.
    ///
    /// Runs in a transaction so concurrent readers never observe a
    /// half-replaced link set.
    pub async fn set_amenities(
        pool: &PgPool,
        property_id: DbId,
        amenity_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM property_amenities WHERE property_id = $1")
            .bind(property_id)
            .execute(&mut *tx)
            .await?;

        if !amenity_ids.is_empty() {
            sqlx::query(
                "INSERT INTO property_amenities (property_id, amenity_id)
                 SELECT $1, unnest($2::bigint[])",
            )
            .bind(property_id)
            .bind(amenity_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }
}
