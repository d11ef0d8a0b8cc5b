//! Listing status and kind vocabularies.
//!
//! Status and kind are stored as plain text columns; these constants and
//! validators keep the accepted values in one place for the DB and API
//! layers.

/// Listing is being drafted and is not publicly visible.
pub const STATUS_DRAFT: &str = "draft";

/// Listing is live on the public site.
pub const STATUS_PUBLISHED: &str = "published";

/// Listing was taken off the market but is kept for the record.
pub const STATUS_ARCHIVED: &str = "archived";

/// All valid listing statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PUBLISHED, STATUS_ARCHIVED];

/// Property is offered for sale.
pub const KIND_SALE: &str = "sale";

/// Property is offered for rent.
pub const KIND_RENT: &str = "rent";

/// All valid listing kinds.
pub const VALID_KINDS: &[&str] = &[KIND_SALE, KIND_RENT];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Validate that a listing kind is one of the accepted values.
pub fn validate_kind(kind: &str) -> Result<(), String> {
    if VALID_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(format!(
            "Invalid listing kind '{kind}'. Must be one of: {}",
            VALID_KINDS.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_statuses_accepted() {
        assert!(validate_status(STATUS_DRAFT).is_ok());
        assert!(validate_status(STATUS_PUBLISHED).is_ok());
        assert!(validate_status(STATUS_ARCHIVED).is_ok());
    }

    #[test]
    fn test_invalid_status_rejected() {
        let result = validate_status("live");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid status"));
    }

    #[test]
    fn test_empty_status_rejected() {
        assert!(validate_status("").is_err());
    }

    #[test]
    fn test_valid_kinds_accepted() {
        assert!(validate_kind(KIND_SALE).is_ok());
        assert!(validate_kind(KIND_RENT).is_ok());
    }

    #[test]
    fn test_invalid_kind_rejected() {
        let result = validate_kind("lease");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid listing kind"));
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert!(validate_status("Draft").is_err());
    }
}
