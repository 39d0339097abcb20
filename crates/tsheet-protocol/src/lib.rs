//! JSON wire contract for the term-sheet comparison service.
//!
//! The UI renders rows in the order `differences` keys appear in the JSON
//! text, so every map here serializes in result order.

pub mod endpoint;
pub mod message;

pub use endpoint::{endpoints, multipart_fields, HealthResponse, SERVICE_NAME};
pub use message::{
    CompareEnvelope, CompareFieldsRequest, ComparisonReport, DiffEntry, Differences,
    ErrorResponse, ResponseStatus,
};
