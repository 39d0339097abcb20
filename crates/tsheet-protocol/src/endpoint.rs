/// Service name reported by the info endpoint.
pub const SERVICE_NAME: &str = "tsheet-server";

/// HTTP endpoint paths.
pub mod endpoints {
    pub const COMPARE_TERMSHEETS: &str = "/api/compare/termsheets";
    pub const COMPARE_FIELDS: &str = "/api/compare/fields";
    pub const HEALTH: &str = "/api/health";
    pub const INFO: &str = "/api/info";
}

/// Multipart part names on the term-sheet upload endpoint.
pub mod multipart_fields {
    pub const IDEAL_FILE: &str = "ideal_file";
    pub const INPUT_FILE: &str = "input_file";
}

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
