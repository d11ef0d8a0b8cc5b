//! Referential-integrity guard for delete operations.
//!
//! Master data (cities, property types, amenities) and listings are
//! referenced by other tables. Deleting a row that is still referenced
//! would orphan those references, so every guarded delete endpoint runs
//! [`check_deletable`] first: load the candidate row, describe each
//! inbound foreign-key edge as a [`DependencyRule`], and only issue the
//! actual `DELETE` once the guard returns `Ok`.
//!
//! The guard is a stateless decision procedure. It never mutates the
//! store, never deletes anything itself, and evaluates rules strictly in
//! the order supplied, stopping at the first violation.

use async_trait::async_trait;

/// Message reported when the delete candidate does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Record not found";

/// Conflict message for rules without a custom one.
pub const FALLBACK_CONFLICT_MESSAGE: &str =
    "Cannot delete this item because related records exist.";

/// An asynchronous `COUNT(*)`-style query against some collection.
///
/// Implementors bind whatever context they need (a pool, a statement, the
/// candidate's key) at construction time; [`count`](Self::count) returns
/// how many rows currently match.
#[async_trait]
pub trait CountQuery {
    type Error;

    /// Number of rows referencing the delete candidate. Non-negative.
    async fn count(&self) -> Result<i64, Self::Error>;
}

/// One inbound reference that blocks deletion while any matching rows
/// exist.
#[derive(Debug)]
pub struct DependencyRule<Q> {
    query: Q,
    violation_message: Option<String>,
}

impl<Q> DependencyRule<Q> {
    pub fn new(query: Q) -> Self {
        Self {
            query,
            violation_message: None,
        }
    }

    /// Replace [`FALLBACK_CONFLICT_MESSAGE`] with a caller-supplied one.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.violation_message = Some(message.into());
        self
    }
}

/// Why a delete was refused.
///
/// `Query` carries the underlying store error unchanged; the guard adds
/// no classification of its own beyond `NotFound` and `Conflict`.
#[derive(Debug, thiserror::Error)]
pub enum DeleteBlocked<E> {
    /// The candidate row does not exist.
    #[error("Record not found")]
    NotFound,

    /// A dependency rule matched one or more referencing rows.
    #[error("{0}")]
    Conflict(String),

    /// A count query itself failed (store unreachable, cancelled, ...).
    #[error(transparent)]
    Query(E),
}

impl<E> DeleteBlocked<E> {
    /// HTTP status the transport layer should translate this outcome to.
    pub fn status_hint(&self) -> u16 {
        match self {
            DeleteBlocked::NotFound => 404,
            DeleteBlocked::Conflict(_) => 400,
            DeleteBlocked::Query(_) => 500,
        }
    }
}

/// Decide whether `record` may be deleted.
///
/// - `None` fails immediately with [`DeleteBlocked::NotFound`]; no rule
///   is evaluated.
/// - Rules run sequentially in the order supplied; rule N+1's query is
///   not issued until rule N's count is known. The first rule whose
///   count is greater than zero fails the check with
///   [`DeleteBlocked::Conflict`] and later rules are never queried.
/// - A failing count query propagates unchanged.
///
/// `Ok` means "safe to delete at the time of the check". The window
/// between check and delete is not closed here; callers needing strict
/// atomicity must wrap both steps in a store-level transaction.
pub async fn check_deletable<R, Q>(
    record: Option<&R>,
    rules: &[DependencyRule<Q>],
) -> Result<(), DeleteBlocked<Q::Error>>
where
    Q: CountQuery + Sync,
{
    if record.is_none() {
        return Err(DeleteBlocked::NotFound);
    }

    for rule in rules {
        let referencing = rule.query.count().await.map_err(DeleteBlocked::Query)?;
        if referencing > 0 {
            let message = rule
                .violation_message
                .clone()
                .unwrap_or_else(|| FALLBACK_CONFLICT_MESSAGE.to_string());
            return Err(DeleteBlocked::Conflict(message));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Debug, Clone, thiserror::Error)]
    #[error("store unreachable")]
    struct StoreDown;

    /// Fixed-outcome count query that records how often it was executed.
    struct FixedCount {
        outcome: Result<i64, StoreDown>,
        calls: AtomicUsize,
    }

    impl FixedCount {
        fn ok(count: i64) -> Self {
            Self {
                outcome: Ok(count),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                outcome: Err(StoreDown),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CountQuery for FixedCount {
        type Error = StoreDown;

        async fn count(&self) -> Result<i64, StoreDown> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    /// A record stand-in; the guard places no structural demands on it.
    struct Row;

    #[tokio::test]
    async fn present_record_with_zero_count_rule_succeeds() {
        let rules = [DependencyRule::new(FixedCount::ok(0))];

        let result = check_deletable(Some(&Row), &rules).await;

        assert!(result.is_ok());
        assert_eq!(rules[0].query.calls(), 1);
    }

    #[tokio::test]
    async fn present_record_with_no_rules_succeeds() {
        let rules: [DependencyRule<FixedCount>; 0] = [];

        assert!(check_deletable(Some(&Row), &rules).await.is_ok());
    }

    #[tokio::test]
    async fn nonzero_count_reports_custom_message() {
        let rules = [DependencyRule::new(FixedCount::ok(3))
            .with_message("Cannot delete: orders exist")];

        let result = check_deletable(Some(&Row), &rules).await;

        match result {
            Err(DeleteBlocked::Conflict(message)) => {
                assert_eq!(message, "Cannot delete: orders exist");
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn nonzero_count_without_message_uses_fallback() {
        let rules = [DependencyRule::new(FixedCount::ok(1))];

        let result = check_deletable(Some(&Row), &rules).await;

        match result {
            Err(DeleteBlocked::Conflict(message)) => {
                assert_eq!(message, FALLBACK_CONFLICT_MESSAGE);
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn absent_record_fails_without_issuing_any_query() {
        let rules = [DependencyRule::new(FixedCount::ok(5))];

        let result = check_deletable(None::<&Row>, &rules).await;

        assert!(matches!(result, Err(DeleteBlocked::NotFound)));
        assert_eq!(rules[0].query.calls(), 0);
    }

    #[tokio::test]
    async fn absent_record_wins_over_matching_rules() {
        // Rules that would conflict are irrelevant when the row is gone.
        let rules = [
            DependencyRule::new(FixedCount::ok(9)).with_message("never reported"),
            DependencyRule::new(FixedCount::failing()),
        ];

        let result = check_deletable(None::<&Row>, &rules).await;

        assert!(matches!(result, Err(DeleteBlocked::NotFound)));
        assert_eq!(rules[0].query.calls(), 0);
        assert_eq!(rules[1].query.calls(), 0);
    }

    #[tokio::test]
    async fn first_violation_wins_and_short_circuits() {
        let rules = [
            DependencyRule::new(FixedCount::ok(0)),
            DependencyRule::new(FixedCount::ok(2)).with_message("B"),
            DependencyRule::new(FixedCount::ok(9)).with_message("C"),
        ];

        let result = check_deletable(Some(&Row), &rules).await;

        match result {
            Err(DeleteBlocked::Conflict(message)) => assert_eq!(message, "B"),
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert_eq!(rules[0].query.calls(), 1);
        assert_eq!(rules[1].query.calls(), 1);
        assert_eq!(rules[2].query.calls(), 0);
    }

    #[tokio::test]
    async fn duplicate_rules_are_evaluated_not_rejected() {
        let rules = [
            DependencyRule::new(FixedCount::ok(0)),
            DependencyRule::new(FixedCount::ok(0)),
        ];

        assert!(check_deletable(Some(&Row), &rules).await.is_ok());
        assert_eq!(rules[0].query.calls(), 1);
        assert_eq!(rules[1].query.calls(), 1);
    }

    #[tokio::test]
    async fn store_error_propagates_and_stops_evaluation() {
        let rules = [
            DependencyRule::new(FixedCount::failing()),
            DependencyRule::new(FixedCount::ok(7)).with_message("unreached"),
        ];

        let result = check_deletable(Some(&Row), &rules).await;

        assert!(matches!(result, Err(DeleteBlocked::Query(StoreDown))));
        assert_eq!(rules[1].query.calls(), 0);
    }

    #[test]
    fn status_hints_match_transport_expectations() {
        assert_eq!(DeleteBlocked::<StoreDown>::NotFound.status_hint(), 404);
        assert_eq!(
            DeleteBlocked::<StoreDown>::Conflict("x".into()).status_hint(),
            400
        );
        assert_eq!(DeleteBlocked::Query(StoreDown).status_hint(), 500);
    }

    #[test]
    fn not_found_displays_fixed_message() {
        assert_eq!(
            DeleteBlocked::<StoreDown>::NotFound.to_string(),
            NOT_FOUND_MESSAGE
        );
    }
}
