//! Domain core for the Estatia property platform.
//!
//! Pure domain logic with no database or HTTP dependencies: shared id and
//! timestamp types, the error taxonomy, listing vocabularies, slug
//! generation, pagination clamps, and the referential-integrity delete
//! guard used by every delete endpoint whose target may still be
//! referenced elsewhere.

pub mod deletion;
pub mod error;
pub mod listing;
pub mod naming;
pub mod pagination;
pub mod types;
