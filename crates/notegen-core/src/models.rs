//! Core data models for notegen.
//!
//! These types are shared across all notegen crates and represent the core
//! domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A stored note.
///
/// `owner_id` is immutable after creation and `is_public` only ever
/// transitions false→true (sharing is one-way).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

/// Request to insert a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
}

/// Fields of a note an owner may change.
///
/// A `None` title keeps the stored title; content is always required.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: String,
}

/// Public read-only view of a shared note.
///
/// Returned from the unauthenticated shared-note path; includes the owner's
/// display name instead of their id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedNote {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub owner_name: String,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

/// Result of a successful generation-pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedNote {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

// =============================================================================
// AUTH
// =============================================================================

/// Authenticated identity attached to a request.
///
/// Produced by an [`crate::IdentityProvider`]; handlers never see raw tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPrincipal {
    pub user_id: Uuid,
    pub name: String,
}
