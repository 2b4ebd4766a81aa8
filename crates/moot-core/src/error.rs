//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used across the Moot Bench fixture crates. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! The fixture dataset itself is constructed infallibly; the only fallible
//! surface is parsing a category tag from external input.

use thiserror::Error;

/// Top-level error type for the Moot Bench fixture crates.
#[derive(Error, Debug)]
pub enum MootError {
    /// A category tag did not match any known case category.
    #[error("unknown case category: {0:?}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CaseCategory;

    #[test]
    fn test_unknown_category_display() {
        let err = MootError::UnknownCategory("maritime".to_string());
        assert_eq!(err.to_string(), "unknown case category: \"maritime\"");
    }

    #[test]
    fn test_category_parse_is_the_only_error_surface() {
        // Exhaustive match: adding an error variant that no operation
        // can produce fails compilation here first.
        let err = "maritime".parse::<CaseCategory>().unwrap_err();
        match err {
            MootError::UnknownCategory(tag) => assert_eq!(tag, "maritime"),
        }
    }
}
