//! Route definitions.
//!
//! Each submodule mounts the handlers for one resource; [`api_routes`]
//! assembles the `/api/v1` tree.

pub mod amenity;
pub mod city;
pub mod health;
pub mod inquiry;
pub mod page;
pub mod property;
pub mod property_type;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /property-types[/{id}][/deletable]     master data, guarded delete
/// /cities[/{id}][/deletable]             master data, guarded delete
/// /amenities[/{id}][/deletable]          master data, guarded delete
/// /properties[/{id}]                     listings, guarded delete
/// /properties/slug/{slug}                public detail lookup
/// /properties/{id}/amenities             link management
/// /inquiries[/{id}][/read]               contact form + admin
/// /pages[/{id}]                          CMS content
/// /pages/slug/{slug}                     public page fetch
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/property-types", property_type::router())
        .nest("/cities", city::router())
        .nest("/amenities", amenity::router())
        .nest("/properties", property::router())
        .nest("/inquiries", inquiry::router())
        .nest("/pages", page::router())
}
