//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers used by the argument-case
//! fixtures. These prevent accidental identifier confusion — you cannot
//! pass an `EvidenceId` where a `CaseId` is expected.
//!
//! Both newtypes are `#[serde(transparent)]`: on the wire an identifier
//! is a plain JSON string, exactly as downstream consumers expect.

use serde::{Deserialize, Serialize};

/// The two opposing sides of an argument case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The party bringing the appeal.
    Appellant,
    /// The party answering the appeal.
    Respondent,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Appellant => "appellant",
            Self::Respondent => "respondent",
        };
        f.write_str(s)
    }
}

/// Unique identifier for an argument case within the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub String);

/// Identifier for an evidence item, unique within its position's list.
///
/// The shipped data follows a prefix convention: appellant evidence ids
/// start with `"C"` and respondent evidence ids with `"R"`. The
/// convention is observed, not enforced — no constructor rejects an id
/// that departs from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceId(pub String);

impl CaseId {
    /// Build a case id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl EvidenceId {
    /// Build an evidence id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The side this id's prefix conventionally belongs to, if any.
    ///
    /// Returns `None` for ids that follow neither the `"C"` nor the
    /// `"R"` prefix convention.
    pub fn side(&self) -> Option<Side> {
        match self.0.chars().next() {
            Some('C') => Some(Side::Appellant),
            Some('R') => Some(Side::Respondent),
            _ => None,
        }
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_id_side_convention() {
        assert_eq!(EvidenceId::new("C3").side(), Some(Side::Appellant));
        assert_eq!(EvidenceId::new("R1").side(), Some(Side::Respondent));
        assert_eq!(EvidenceId::new("X9").side(), None);
        assert_eq!(EvidenceId::new("").side(), None);
    }

    #[test]
    fn test_serde_transparent_string() {
        let id = CaseId::new("2");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"2\"");
        let back: CaseId = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(back, id);

        let ev = EvidenceId::new("C3");
        assert_eq!(serde_json::to_string(&ev).unwrap(), "\"C3\"");
    }

    #[test]
    fn test_display_matches_inner() {
        assert_eq!(CaseId::new("5").to_string(), "5");
        assert_eq!(EvidenceId::new("R10").to_string(), "R10");
    }
}
