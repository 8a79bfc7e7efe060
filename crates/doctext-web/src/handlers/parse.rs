use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use doctext_core::DocumentKind;

use crate::models::ParsedTextResponse;
use crate::state::AppState;
use crate::upload::{self, Upload};

const UNSUPPORTED_TYPE: &str = "Unsupported file type. Please upload a PDF, DOCX, or TXT file.";

/// Fallback when extraction succeeded but produced no text.
const GENERIC_EXTRACTION_ERROR: &str =
    "Failed to extract text from the document. The file might be corrupted or in an unsupported format.";

/// `POST /parse_document`: receive a file, extract its text, return it.
pub async fn parse_document(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Response {
    let upload = match upload::parse_multipart(multipart).await {
        Ok(upload) => upload,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let Some(kind) = DocumentKind::from_filename(&upload.filename) else {
        return error_response(StatusCode::BAD_REQUEST, UNSUPPORTED_TYPE);
    };

    tracing::debug!(filename = %upload.filename, kind = ?kind, bytes = upload.data.len(), "parsing upload");

    match extract_upload(&state, upload, kind).await {
        Ok(text) if !text.is_empty() => {
            (StatusCode::OK, Json(ParsedTextResponse { parsed_text: text })).into_response()
        }
        Ok(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_EXTRACTION_ERROR),
        Err(e) => {
            tracing::warn!(error = %e, "extraction failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e)
        }
    }
}

/// Write the upload to a scoped temp dir, extract, clean up.
///
/// The `TempDir` drop removes the upload on every path out of this
/// function, success or failure. The directory name is randomized and
/// the inner filename is fixed, so the client-supplied filename never
/// reaches the filesystem and concurrent requests cannot collide.
async fn extract_upload(
    state: &Arc<AppState>,
    upload: Upload,
    kind: DocumentKind,
) -> Result<String, String> {
    let temp_dir = match &state.upload_root {
        Some(root) => tempfile::tempdir_in(root),
        None => tempfile::tempdir(),
    }
    .map_err(|e| format!("Failed to create temp directory: {}", e))?;

    let path = temp_dir.path().join(format!("upload.{}", kind.extension()));
    std::fs::write(&path, &upload.data).map_err(|e| format!("Failed to write temp file: {}", e))?;

    // MuPDF and archive access are blocking; keep them off the async runtime
    let extractor = Arc::clone(&state.extractor);
    let result = tokio::task::spawn_blocking(move || extractor.extract(&path, kind))
        .await
        .map_err(|e| format!("Task join error: {}", e))?;

    drop(temp_dir);

    result.map_err(|e| e.to_string())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
