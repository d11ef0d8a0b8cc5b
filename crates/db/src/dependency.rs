//! Count-query adapters for the delete guard.
//!
//! Each constructor names one inbound foreign-key edge of the schema.
//! Handlers combine them into ordered [`DependencyRule`]
//! (`estatia_core::deletion`) sets before a guarded delete.

use async_trait::async_trait;
use sqlx::PgPool;

use estatia_core::deletion::CountQuery;
use estatia_core::types::DbId;

/// A `SELECT COUNT(*)` statement bound to a pool and a candidate id.
#[derive(Debug)]
pub struct ForeignRefCount<'a> {
    pool: &'a PgPool,
    sql: &'static str,
    id: DbId,
}

impl<'a> ForeignRefCount<'a> {
    fn new(pool: &'a PgPool, sql: &'static str, id: DbId) -> Self {
        Self { pool, sql, id }
    }

    /// Properties assigned to a city.
    pub fn properties_in_city(pool: &'a PgPool, city_id: DbId) -> Self {
        Self::new(
            pool,
            "SELECT COUNT(*) FROM properties WHERE city_id = $1",
            city_id,
        )
    }

    /// Properties of a property type.
    pub fn properties_of_type(pool: &'a PgPool, property_type_id: DbId) -> Self {
        Self::new(
            pool,
            "SELECT COUNT(*) FROM properties WHERE property_type_id = $1",
            property_type_id,
        )
    }

    /// Link rows attaching an amenity to any property.
    pub fn properties_with_amenity(pool: &'a PgPool, amenity_id: DbId) -> Self {
        Self::new(
            pool,
            "SELECT COUNT(*) FROM property_amenities WHERE amenity_id = $1",
            amenity_id,
        )
    }

    /// Inquiries filed against a property.
    pub fn inquiries_for_property(pool: &'a PgPool, property_id: DbId) -> Self {
        Self::new(
            pool,
            "SELECT COUNT(*) FROM inquiries WHERE property_id = $1",
            property_id,
        )
    }

    /// Amenity links owned by a property.
    pub fn amenity_links_for_property(pool: &'a PgPool, property_id: DbId) -> Self {
        Self::new(
            pool,
            "SELECT COUNT(*) FROM property_amenities WHERE property_id = $1",
            property_id,
        )
    }
}

#[async_trait]
impl<'a> CountQuery for ForeignRefCount<'a> {
    type Error = sqlx::Error;

    async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(self.sql)
            .bind(self.id)
            .fetch_one(self.pool)
            .await
    }
}
