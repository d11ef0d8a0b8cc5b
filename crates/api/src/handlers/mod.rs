//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the corresponding repository in
//! `estatia_db` and map errors via [`AppError`](crate::error::AppError).
//! Delete handlers for referenced entities run the delete guard first.

pub mod amenity;
pub mod city;
pub mod inquiry;
pub mod page;
pub mod property;
pub mod property_type;

use estatia_core::deletion::{check_deletable, CountQuery, DeleteBlocked, DependencyRule};

use crate::response::DeleteCheck;

/// Run the guard without deleting, for `GET /{id}/deletable` endpoints.
///
/// A missing record or a violated rule becomes a `deletable: false`
/// payload; only store errors surface as errors.
pub(crate) async fn guard_preview<R, Q>(
    record: Option<&R>,
    rules: &[DependencyRule<Q>],
) -> Result<DeleteCheck, sqlx::Error>
where
    Q: CountQuery<Error = sqlx::Error> + Sync,
{
    match check_deletable(record, rules).await {
        Ok(()) => Ok(DeleteCheck {
            deletable: true,
            message: None,
        }),
        Err(DeleteBlocked::Query(err)) => Err(err),
        Err(blocked) => Ok(DeleteCheck {
            deletable: false,
            message: Some(blocked.to_string()),
        }),
    }
}
