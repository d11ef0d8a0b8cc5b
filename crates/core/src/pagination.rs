//! Pagination defaults and clamps shared by list endpoints.
//!
//! This module lives in `core` (zero internal deps) so the repository
//! layer and any future CLI tooling agree on the same limits.

/// Default number of rows per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum number of rows per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp an optional caller-supplied limit into `[1, max]`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    match limit {
        Some(l) if l < 1 => 1,
        Some(l) if l > max => max,
        Some(l) => l,
        None => default,
    }
}

/// Clamp an optional caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_limit_uses_default() {
        assert_eq!(clamp_limit(None, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 20);
    }

    #[test]
    fn oversized_limit_is_capped() {
        assert_eq!(clamp_limit(Some(10_000), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 100);
    }

    #[test]
    fn zero_and_negative_limits_become_one() {
        assert_eq!(clamp_limit(Some(0), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 1);
        assert_eq!(clamp_limit(Some(-5), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 1);
    }

    #[test]
    fn in_range_limit_passes_through() {
        assert_eq!(clamp_limit(Some(42), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 42);
    }

    #[test]
    fn offsets_never_go_negative() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(Some(30)), 30);
    }
}
