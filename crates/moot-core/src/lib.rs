//! # moot-core — Foundational Types for the Moot Bench Fixtures
//!
//! This crate is the bedrock of the Moot Bench fixture library. It defines
//! the type-system primitives shared by every fixture record. The
//! `moot-fixtures` crate depends on `moot-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `CaseId` and
//!    `EvidenceId` are newtypes over their string forms. No bare strings
//!    for identifiers, and no confusing a case id with an evidence id.
//!
//! 2. **Single `CaseCategory` enum.** One closed definition of the five
//!    category tags, exhaustive `match` everywhere. Adding a category
//!    forces every consumer to handle it at compile time.
//!
//! 3. **String contract preserved on the wire.** Identifier newtypes are
//!    `#[serde(transparent)]` and categories serialize to their exact
//!    dataset tags, so external consumers see plain strings throughout.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `moot-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod category;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use category::{CaseCategory, CASE_CATEGORY_COUNT};
pub use error::MootError;
pub use identity::{CaseId, EvidenceId, Side};
