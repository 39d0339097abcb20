use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::Extension;
use serde_json::json;
use tsheet_protocol::{
    multipart_fields, CompareEnvelope, CompareFieldsRequest, ComparisonReport, HealthResponse,
    SERVICE_NAME,
};
use tsheet_types::FieldSet;

use crate::auth::Session;
use crate::error::{ServerError, ServerResult};
use crate::extract::UploadedDocument;
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "normalization": state.comparator.policy(),
        "include_highlights": state.include_highlights,
    }))
}

/// Compare two field sets the caller has already extracted.
pub async fn compare_fields_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    payload: Result<Json<CompareFieldsRequest>, JsonRejection>,
) -> ServerResult<Json<CompareEnvelope>> {
    let Json(request) = payload.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(e) => ServerError::InvalidFields(e.body_text()),
        other => body_error(other.status(), other.body_text()),
    })?;
    tracing::debug!(identity = %session.identity.name, "comparing pre-extracted fields");
    respond(&state, request.ideal_fields, request.input_fields)
}

/// Compare two uploaded term sheets via the configured extractor.
pub async fn compare_termsheets_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<CompareEnvelope>> {
    let mut multipart = multipart.map_err(|e| body_error(e.status(), e.body_text()))?;
    let mut ideal_doc: Option<UploadedDocument> = None;
    let mut input_doc: Option<UploadedDocument> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| body_error(e.status(), e.body_text()))?
    {
        let part = field.name().unwrap_or_default().to_string();
        let slot = match part.as_str() {
            multipart_fields::IDEAL_FILE => &mut ideal_doc,
            multipart_fields::INPUT_FILE => &mut input_doc,
            _ => {
                tracing::debug!(part = %part, "ignoring unexpected multipart part");
                continue;
            }
        };
        if slot.is_some() {
            return Err(ServerError::BadRequest(format!("duplicate multipart part: {part}")));
        }
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| body_error(e.status(), e.body_text()))?;
        *slot = Some(UploadedDocument { part, file_name, content_type, bytes });
    }

    tracing::debug!(
        identity = %session.identity.name,
        ideal = ?ideal_doc.as_ref().map(UploadedDocument::label),
        input = ?input_doc.as_ref().map(UploadedDocument::label),
        "comparing uploaded term sheets"
    );

    let (ideal, input) = tokio::try_join!(
        extract_optional(&state, ideal_doc.as_ref()),
        extract_optional(&state, input_doc.as_ref()),
    )?;
    respond(&state, ideal, input)
}

fn body_error(status: StatusCode, detail: String) -> ServerError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(detail)
    } else {
        ServerError::BadRequest(detail)
    }
}

async fn extract_optional(
    state: &AppState,
    document: Option<&UploadedDocument>,
) -> ServerResult<Option<FieldSet>> {
    match document {
        Some(doc) => state.extractor.extract(doc).await.map(Some),
        None => Ok(None),
    }
}

fn respond(
    state: &AppState,
    ideal: Option<FieldSet>,
    input: Option<FieldSet>,
) -> ServerResult<Json<CompareEnvelope>> {
    let result = state.comparator.compare(ideal.as_ref(), input.as_ref())?;
    let summary = result.summary();
    tracing::debug!(
        fields = summary.total,
        same = summary.same,
        changed = summary.changed,
        missing_in_input = summary.missing_in_input,
        extra_in_input = summary.extra_in_input,
        not_found_in_both = summary.not_found_in_both,
        "comparison complete"
    );

    let mut report =
        ComparisonReport::new(ideal.unwrap_or_default(), input.unwrap_or_default(), result);
    if state.include_highlights {
        report = report.with_highlights(state.comparator.policy());
    }
    Ok(Json(CompareEnvelope::success(report)))
}
