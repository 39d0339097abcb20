//! Foundation types for term-sheet comparison.
//!
//! Every other `tsheet` crate depends on `tsheet-types`. The types here are
//! plain data: they carry no comparison logic beyond key normalization.
//!
//! # Key Types
//!
//! - [`FieldName`] — Trimmed, case-folded field key
//! - [`FieldSet`] — Extracted field name → optional text mapping for one document
//! - [`FieldStatus`] — Closed set of per-field comparison outcomes
//! - [`FieldDiff`] — One field's values and status
//! - [`ComparisonResult`] — Ordered collection of [`FieldDiff`]s for one document pair

pub mod diff;
pub mod error;
pub mod field;
pub mod field_set;
pub mod status;

pub use diff::{ComparisonResult, FieldDiff};
pub use error::TypeError;
pub use field::FieldName;
pub use field_set::FieldSet;
pub use status::{FieldStatus, StatusCounts};
