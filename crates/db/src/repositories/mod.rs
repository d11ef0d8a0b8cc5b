//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod amenity_repo;
pub mod city_repo;
pub mod inquiry_repo;
pub mod page_repo;
pub mod property_repo;
pub mod property_type_repo;

pub use amenity_repo::AmenityRepo;
pub use city_repo::CityRepo;
pub use inquiry_repo::InquiryRepo;
pub use page_repo::PageRepo;
pub use property_repo::PropertyRepo;
pub use property_type_repo::PropertyTypeRepo;
