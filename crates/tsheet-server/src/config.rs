use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tsheet_diff::NormalizationPolicy;

use crate::error::{ServerError, ServerResult};

/// Complete service configuration, loaded from TOML.
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TsheetConfig {
    /// Which field extractor turns uploaded documents into field sets.
    pub extractor: ExtractorKind,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub compare: CompareConfig,
}

impl TsheetConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> ServerResult<()> {
        if self.server.request_timeout_ms == 0 {
            return Err(ServerError::Config(
                "server.request_timeout_ms must be greater than zero".into(),
            ));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(ServerError::Config(
                "server.max_upload_bytes must be greater than zero".into(),
            ));
        }
        if !self.auth.allow_anonymous && self.auth.api_tokens.is_empty() {
            return Err(ServerError::Config(
                "auth.allow_anonymous = false requires a non-empty auth.api_tokens".into(),
            ));
        }
        if self.auth.api_tokens.iter().any(|t| t.trim().is_empty()) {
            return Err(ServerError::Config("auth.api_tokens must not contain blank tokens".into()));
        }
        for origin in &self.server.cors_allowed_origins {
            if origin != "*" && axum::http::HeaderValue::from_str(origin).is_err() {
                return Err(ServerError::Config(format!("invalid CORS origin: {origin:?}")));
            }
        }
        Ok(())
    }
}

/// Listener and HTTP boundary settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Requests running longer than this are answered with 408.
    pub request_timeout_ms: u64,
    /// Upper bound on a request body, covering both uploads together.
    pub max_upload_bytes: usize,
    /// Browser origins allowed to call the API. `"*"` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            request_timeout_ms: 10_000,
            max_upload_bytes: 20 * 1024 * 1024,
            cors_allowed_origins: vec!["http://localhost:5173".into()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Accept requests that carry no bearer token.
    pub allow_anonymous: bool,
    /// Accepted bearer tokens. Empty means any token is accepted.
    pub api_tokens: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allow_anonymous: true,
            api_tokens: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Attach word-level highlights to `changed` fields.
    pub include_highlights: bool,
    pub normalization: NormalizationPolicy,
}

/// Built-in field extractors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Each uploaded part is a JSON field mapping.
    #[default]
    Json,
    /// Uploads are rejected; only the pre-extracted fields endpoint works.
    #[serde(rename = "none")]
    Disabled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = TsheetConfig::default();
        assert_eq!(c.server.bind_addr, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.server.request_timeout(), Duration::from_secs(10));
        assert_eq!(c.server.max_upload_bytes, 20 * 1024 * 1024);
        assert!(c.auth.allow_anonymous);
        assert!(!c.compare.include_highlights);
        assert_eq!(c.compare.normalization, NormalizationPolicy::default());
        assert_eq!(c.extractor, ExtractorKind::Json);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        let c = TsheetConfig::from_toml_str("").unwrap();
        assert_eq!(c, TsheetConfig::default());
    }

    #[test]
    fn partial_document_overrides() {
        let c = TsheetConfig::from_toml_str(
            r#"
            extractor = "none"

            [server]
            bind_addr = "0.0.0.0:9000"

            [compare.normalization]
            case_insensitive = false
            "#,
        )
        .unwrap();
        assert_eq!(c.extractor, ExtractorKind::Disabled);
        assert_eq!(c.server.bind_addr.port(), 9000);
        assert_eq!(c.server.request_timeout_ms, 10_000);
        assert!(c.compare.normalization.collapse_whitespace);
        assert!(!c.compare.normalization.case_insensitive);
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = TsheetConfig::from_toml_str("[server]\nrequest_timeout_ms = 0").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn closed_auth_requires_tokens() {
        let err = TsheetConfig::from_toml_str("[auth]\nallow_anonymous = false").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));

        let ok = TsheetConfig::from_toml_str(
            "[auth]\nallow_anonymous = false\napi_tokens = [\"secret-token\"]",
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn invalid_cors_origin_rejected() {
        let err = TsheetConfig::from_toml_str("[server]\ncors_allowed_origins = [\"bad\\norigin\"]")
            .unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn unknown_extractor_rejected() {
        assert!(TsheetConfig::from_toml_str("extractor = \"ocr\"").is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let mut c = TsheetConfig::default();
        c.compare.include_highlights = true;
        c.auth.api_tokens = vec!["abc".into()];
        let text = c.to_toml().unwrap();
        assert_eq!(TsheetConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[compare]\ninclude_highlights = true").unwrap();
        let c = TsheetConfig::load(file.path()).unwrap();
        assert!(c.compare.include_highlights);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TsheetConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
