use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tsheet_diff::DiffError;
use tsheet_protocol::ErrorResponse;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Compare(#[from] DiffError),

    #[error("invalid fields: {0}")]
    InvalidFields(String),

    #[error("extraction failed for {document}: {reason}")]
    Extraction { document: String, reason: String },

    #[error("no field extractor is configured for document uploads")]
    ExtractorUnavailable,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Stable machine-readable code carried in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Compare(DiffError::InvalidInput) => "invalid_input",
            Self::InvalidFields(_) => "invalid_fields",
            Self::Extraction { .. } => "extraction_failed",
            Self::ExtractorUnavailable => "extractor_unavailable",
            Self::BadRequest(_) => "bad_request",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::Unauthorized(_) => "unauthorized",
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Compare(DiffError::InvalidInput) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidFields(_) | Self::Extraction { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ExtractorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        if status.is_server_error() {
            tracing::error!(code, error = %self, "request failed");
        } else {
            tracing::warn!(code, error = %self, "request rejected");
        }
        // Internal details stay in the log.
        let detail = if status.is_server_error() && code == "internal" {
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorResponse::new(code, detail))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_statuses() {
        let cases = [
            (ServerError::Compare(DiffError::InvalidInput), "invalid_input", 400),
            (ServerError::InvalidFields("x".into()), "invalid_fields", 422),
            (
                ServerError::Extraction { document: "ideal_file".into(), reason: "eof".into() },
                "extraction_failed",
                422,
            ),
            (ServerError::ExtractorUnavailable, "extractor_unavailable", 503),
            (ServerError::BadRequest("x".into()), "bad_request", 400),
            (ServerError::PayloadTooLarge("x".into()), "payload_too_large", 413),
            (ServerError::Unauthorized("x".into()), "unauthorized", 401),
            (ServerError::Internal("x".into()), "internal", 500),
        ];
        for (err, code, status) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.status_code().as_u16(), status);
        }
    }

    #[test]
    fn invalid_input_message() {
        let err = ServerError::from(DiffError::InvalidInput);
        assert!(err.to_string().contains("both ideal and input field sets are absent"));
    }

    #[test]
    fn into_response_status() {
        let response = ServerError::ExtractorUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
