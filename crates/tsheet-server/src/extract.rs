//! Field extraction seam.
//!
//! Turning a term-sheet PDF into a [`FieldSet`] is the job of an external
//! extraction service. The server only depends on [`FieldExtractor`]; the
//! built-in implementations cover pre-extracted uploads and the case where
//! no extractor is deployed.

use async_trait::async_trait;
use bytes::Bytes;
use tsheet_types::FieldSet;

use crate::error::{ServerError, ServerResult};

/// One uploaded multipart part.
#[derive(Clone, Debug)]
pub struct UploadedDocument {
    /// Multipart part name (`ideal_file` or `input_file`).
    pub part: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedDocument {
    /// Display label used in logs and error messages.
    pub fn label(&self) -> String {
        match &self.file_name {
            Some(name) => format!("{} ({name})", self.part),
            None => self.part.clone(),
        }
    }
}

#[async_trait]
pub trait FieldExtractor: Send + Sync {
    async fn extract(&self, document: &UploadedDocument) -> ServerResult<FieldSet>;
}

/// Treats each upload as a JSON object of field name → string or null.
pub struct JsonFieldExtractor;

#[async_trait]
impl FieldExtractor for JsonFieldExtractor {
    async fn extract(&self, document: &UploadedDocument) -> ServerResult<FieldSet> {
        serde_json::from_slice(&document.bytes).map_err(|e| {
            let reason = match &document.content_type {
                Some(content_type) => format!("{e} (uploaded as {content_type})"),
                None => e.to_string(),
            };
            ServerError::Extraction { document: document.label(), reason }
        })
    }
}

/// Rejects every upload.
pub struct UnavailableExtractor;

#[async_trait]
impl FieldExtractor for UnavailableExtractor {
    async fn extract(&self, _document: &UploadedDocument) -> ServerResult<FieldSet> {
        Err(ServerError::ExtractorUnavailable)
    }
}
