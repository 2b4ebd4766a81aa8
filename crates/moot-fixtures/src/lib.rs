//! # moot-fixtures — The Argument-Case Dataset
//!
//! Ships the Moot Bench fixture dataset: five legal-argument test cases,
//! each pairing an appellant position against a respondent position over a
//! disputed issue.
//!
//! - **Records** (`record.rs`): the `ArgumentCase`, `Position`, and
//!   `Evidence` shapes.
//!
//! - **Dataset** (`cases.rs`): the five literal records, exposed through
//!   [`argument_cases()`] and the [`find_case()`] id lookup.
//!
//! ## Crate Policy
//!
//! - The dataset is built once and is immutable for the life of the
//!   process; every accessor hands out `&'static` shared references, so
//!   concurrent readers need no locking.
//! - Construction is infallible: there is no external input to validate
//!   and no resource to acquire.
//! - Depends only on `moot-core` internally.

pub mod cases;
pub mod record;

pub use cases::{argument_cases, find_case, ARGUMENT_CASE_COUNT};
pub use record::{ArgumentCase, Evidence, Position};
