//! # Case Categories — Single Source of Truth
//!
//! Defines the `CaseCategory` enum with all five classification tags used
//! by the argument-case fixtures. This is the ONE definition used across
//! the fixture crates. Every `match` on `CaseCategory` must be exhaustive,
//! so adding a category forces every consumer to handle it at compile time.
//!
//! The serialized form of each variant is its exact dataset tag — note that
//! `IntellectualProperty` serializes with an interior space, as
//! `"intellectual property"` — so external consumers continue to see the
//! category as a plain string.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MootError;

/// Classification tag for an argument case.
///
/// Each category names the area of law the disputed issue falls under.
/// The dataset ships one case per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseCategory {
    /// Personal and subject-matter jurisdiction disputes.
    #[serde(rename = "jurisdiction")]
    Jurisdiction,
    /// Patent, trademark, and copyright disputes.
    #[serde(rename = "intellectual property")]
    IntellectualProperty,
    /// Employment law (termination, retaliation, discrimination).
    #[serde(rename = "employment")]
    Employment,
    /// Contract formation, performance, and breach.
    #[serde(rename = "contract")]
    Contract,
    /// Tort claims (negligence, duty of care, causation).
    #[serde(rename = "tort")]
    Tort,
}

/// Total number of case categories. Used for compile-time assertions.
pub const CASE_CATEGORY_COUNT: usize = 5;

impl CaseCategory {
    /// Returns all five case categories in canonical order.
    pub fn all_categories() -> &'static [CaseCategory] {
        &[
            Self::Jurisdiction,
            Self::IntellectualProperty,
            Self::Employment,
            Self::Contract,
            Self::Tort,
        ]
    }

    /// Returns the string tag for this category.
    ///
    /// This must match the serde serialization format exactly, including
    /// the interior space in `"intellectual property"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jurisdiction => "jurisdiction",
            Self::IntellectualProperty => "intellectual property",
            Self::Employment => "employment",
            Self::Contract => "contract",
            Self::Tort => "tort",
        }
    }
}

impl std::fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseCategory {
    type Err = MootError;

    /// Parse a case category from its string tag.
    ///
    /// Accepts the same tags produced by [`CaseCategory::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jurisdiction" => Ok(Self::Jurisdiction),
            "intellectual property" => Ok(Self::IntellectualProperty),
            "employment" => Ok(Self::Employment),
            "contract" => Ok(Self::Contract),
            "tort" => Ok(Self::Tort),
            other => Err(MootError::UnknownCategory(other.to_string())),
        }
    }
}
