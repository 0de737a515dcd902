//! File upload parsing handler.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use notegen_extract::StagedUpload;

use crate::{middleware::RequireAuth, ApiError, AppState};

/// Response from a successful file parse.
#[derive(Debug, Serialize)]
pub struct ParseFileResponse {
    pub extracted_text: String,
    pub file_name: String,
    pub message: String,
}

/// Parse an uploaded file into plain text.
///
/// Expects a multipart body with a `file` part. The upload is staged to
/// disk, routed by its declared MIME type, and the staged copy is removed
/// before the response is produced, whatever the outcome.
pub async fn parse_file(
    State(state): State<AppState>,
    RequireAuth(_principal): RequireAuth,
    mut multipart: Multipart,
) -> Result<Json<ParseFileResponse>, ApiError> {
    let mut upload: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
        upload = Some((file_name, content_type, data.to_vec()));
        break;
    }

    let Some((file_name, content_type, data)) = upload else {
        return Err(ApiError::BadRequest("No file uploaded".to_string()));
    };

    debug!(
        subsystem = "api",
        component = "files",
        op = "parse_file",
        content_type = %content_type,
        size = data.len(),
        "Upload received"
    );

    let staged =
        StagedUpload::stage(&state.staging_dir, &file_name, &content_type, &data).await?;
    let extracted_text = state.dispatcher.parse(staged).await?;

    Ok(Json(ParseFileResponse {
        extracted_text,
        file_name,
        message: "File parsed successfully".to_string(),
    }))
}
