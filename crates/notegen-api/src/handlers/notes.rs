//! Note HTTP handlers.
//!
//! All owner-scoped routes authenticate through [`RequireAuth`]; the shared
//! route is the single unauthenticated read path and only ever sees notes
//! whose public flag is set.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notegen_core::{
    defaults::MANUAL_TITLE_FALLBACK, Error, GeneratedNote, NewNote, Note, NoteRepository,
    NoteUpdate, SharedNote,
};

use crate::{middleware::RequireAuth, ApiError, AppState};

// =============================================================================
// GENERATE
// =============================================================================

/// Request body for AI note generation.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Raw multi-line query; one question per line.
    pub query: String,
}

/// Generate a note from a query via the batching pipeline.
pub async fn generate_note(
    State(state): State<AppState>,
    RequireAuth(principal): RequireAuth,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GeneratedNote>, ApiError> {
    let note = state
        .generation
        .generate_note(principal.user_id, &req.query)
        .await?;
    Ok(Json(note))
}

// =============================================================================
// MANUAL SAVE / UPDATE
// =============================================================================

/// Request body for manual note creation.
#[derive(Debug, Deserialize)]
pub struct SaveNoteRequest {
    pub title: Option<String>,
    pub content: String,
}

/// Save a manually written note.
pub async fn save_manual_note(
    State(state): State<AppState>,
    RequireAuth(principal): RequireAuth,
    Json(req): Json<SaveNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    if req.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Content is required".to_string()));
    }

    let id = state
        .notes
        .insert(NewNote {
            owner_id: principal.user_id,
            title: req.title.unwrap_or_else(|| MANUAL_TITLE_FALLBACK.to_string()),
            content: req.content,
        })
        .await?;
    let note = state.notes.fetch_owned(id, principal.user_id).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// Request body for note updates.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    /// Omitted title keeps the stored one.
    pub title: Option<String>,
    pub content: String,
}

/// Update an owned note's title/content.
pub async fn update_note(
    State(state): State<AppState>,
    RequireAuth(principal): RequireAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    if req.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Content is required".to_string()));
    }

    let note = state
        .notes
        .update(
            id,
            principal.user_id,
            NoteUpdate {
                title: req.title,
                content: req.content,
            },
        )
        .await?;
    Ok(Json(note))
}

// =============================================================================
// READ
// =============================================================================

/// List all notes of the caller, newest first.
pub async fn list_notes(
    State(state): State<AppState>,
    RequireAuth(principal): RequireAuth,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.notes.list_by_owner(principal.user_id).await?;
    Ok(Json(notes))
}

/// Fetch a single owned note.
pub async fn get_note(
    State(state): State<AppState>,
    RequireAuth(principal): RequireAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<Note>, ApiError> {
    let note = state.notes.fetch_owned(id, principal.user_id).await?;
    Ok(Json(note))
}

/// Fetch a public note by id alone. No authentication; private notes are
/// reported as not found.
pub async fn get_shared_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SharedNote>, ApiError> {
    let note = state.notes.fetch_public(id).await.map_err(|e| match e {
        Error::NoteNotFound(_) => {
            ApiError::NotFound("Shared note not found or not public".to_string())
        }
        other => other.into(),
    })?;
    Ok(Json(note))
}

// =============================================================================
// SHARE / DELETE
// =============================================================================

/// Response for state-changing operations without a payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

/// Mark an owned note public. One-way: sharing cannot be undone.
pub async fn share_note(
    State(state): State<AppState>,
    RequireAuth(principal): RequireAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.notes.mark_public(id, principal.user_id).await?;
    Ok(Json(MessageResponse {
        message: "Note is now public".to_string(),
        id: Some(id),
    }))
}

/// Delete an owned note.
pub async fn delete_note(
    State(state): State<AppState>,
    RequireAuth(principal): RequireAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.notes.delete(id, principal.user_id).await?;
    Ok(Json(MessageResponse {
        message: "Note deleted successfully".to_string(),
        id: None,
    }))
}
