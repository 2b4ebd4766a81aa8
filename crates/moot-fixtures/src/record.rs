//! # Argument-Case Record Shapes
//!
//! The three record types that make up a fixture: an [`ArgumentCase`]
//! holds exactly one appellant and one respondent [`Position`], and each
//! position carries its own ordered [`Evidence`] list and caselaw
//! citations.
//!
//! Serialized field names follow the external contract — `mainArgument`
//! and `desc` rather than their Rust spellings — so interchange output is
//! byte-compatible with what downstream consumers already parse.

use serde::{Deserialize, Serialize};

use moot_core::{CaseCategory, CaseId, EvidenceId, Side};

/// A labeled piece of supporting material referenced by a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Identifier, unique within the enclosing position's evidence list.
    pub id: EvidenceId,
    /// Short description of the material.
    pub desc: String,
}

/// One side's complete argument: headline claim, supporting points,
/// evidence, and precedent.
///
/// The order of `details`, `evidence`, and `caselaw` is meaningful for
/// presentation and is preserved through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Headline claim for this side.
    pub main_argument: String,
    /// Supporting points, in presentation order.
    pub details: Vec<String>,
    /// Supporting evidence items, in presentation order.
    pub evidence: Vec<Evidence>,
    /// Citations to prior cases or rulings used as precedent.
    pub caselaw: Vec<String>,
}

/// One record describing a disputed legal issue with two opposing
/// positions.
///
/// Every case has exactly one appellant and one respondent position;
/// neither is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentCase {
    /// Identifier, unique across the dataset and usable as a lookup key.
    pub id: CaseId,
    /// Short label for the legal question in dispute.
    pub issue: String,
    /// Classification tag for the area of law.
    pub category: CaseCategory,
    /// The appellant's side of the case.
    pub appellant: Position,
    /// The respondent's side of the case.
    pub respondent: Position,
}

impl ArgumentCase {
    /// Select one side's position.
    pub fn position(&self, side: Side) -> &Position {
        match side {
            Side::Appellant => &self.appellant,
            Side::Respondent => &self.respondent,
        }
    }
}
