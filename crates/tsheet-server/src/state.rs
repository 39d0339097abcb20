use std::sync::Arc;

use tsheet_diff::Comparator;

use crate::auth::{AllowAllAuth, AuthProvider, StaticTokenAuth};
use crate::config::{ExtractorKind, TsheetConfig};
use crate::extract::{FieldExtractor, JsonFieldExtractor, UnavailableExtractor};

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub comparator: Comparator,
    pub include_highlights: bool,
    pub allow_anonymous: bool,
    pub extractor: Arc<dyn FieldExtractor>,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    pub fn from_config(config: &TsheetConfig) -> Self {
        let extractor: Arc<dyn FieldExtractor> = match config.extractor {
            ExtractorKind::Json => Arc::new(JsonFieldExtractor),
            ExtractorKind::Disabled => Arc::new(UnavailableExtractor),
        };
        let auth: Arc<dyn AuthProvider> = if config.auth.api_tokens.is_empty() {
            Arc::new(AllowAllAuth)
        } else {
            Arc::new(StaticTokenAuth::new(config.auth.api_tokens.iter().cloned()))
        };
        Self {
            comparator: Comparator::new(config.compare.normalization),
            include_highlights: config.compare.include_highlights,
            allow_anonymous: config.auth.allow_anonymous,
            extractor,
            auth,
        }
    }

    /// Replace the field extractor.
    pub fn with_extractor(mut self, extractor: Arc<dyn FieldExtractor>) -> Self {
        self.extractor = extractor;
        self
    }
}
