//! Comparison engine for term sheets.
//!
//! Compares the fields extracted from an "ideal" reference term sheet with
//! those extracted from an "input" term sheet under review. The pipeline is
//! pure and synchronous: [`align`] builds the ordered union of field names,
//! then [`classify`] assigns each field a [`FieldStatus`](tsheet_types::FieldStatus).
//!
//! # Key Types
//!
//! - [`NormalizationPolicy`] -- How values are canonicalized before equality checks
//! - [`Classifier`] -- Status assignment under a policy
//! - [`Comparator`] -- Aligner + classifier orchestration
//! - [`HighlightSegment`] -- Word-level diff of a changed value

pub mod align;
pub mod classify;
pub mod compare;
pub mod error;
pub mod highlight;
pub mod normalize;

pub use align::align;
pub use classify::{classify, Classifier};
pub use compare::{compare, Comparator};
pub use error::{DiffError, DiffResult};
pub use highlight::{highlight_values, HighlightSegment, SegmentKind};
pub use normalize::NormalizationPolicy;
