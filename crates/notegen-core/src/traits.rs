//! Trait definitions for notegen's boundary collaborators.
//!
//! Persistence, identity, generation, and OCR are all consumed through these
//! traits so handlers and services can be tested against in-memory or mock
//! implementations.

use async_trait::async_trait;
use std::path::Path;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{AuthPrincipal, NewNote, Note, NoteUpdate, SharedNote};

// =============================================================================
// PERSISTENCE TRAITS
// =============================================================================

/// Repository for note CRUD operations.
///
/// Every owner-scoped method takes the caller's `owner_id` and must enforce
/// ownership in the lookup itself: a note belonging to someone else behaves
/// exactly like a missing note (`Error::NoteNotFound`).
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note and return its id.
    async fn insert(&self, note: NewNote) -> Result<Uuid>;

    /// Fetch a note owned by `owner_id`.
    async fn fetch_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Note>;

    /// Fetch a public note by id alone, with the owner's display name.
    ///
    /// Returns `Error::NoteNotFound` for private notes; callers cannot
    /// distinguish "private" from "absent".
    async fn fetch_public(&self, id: Uuid) -> Result<SharedNote>;

    /// List all notes owned by `owner_id`, newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Note>>;

    /// Update title/content of a note owned by `owner_id`.
    async fn update(&self, id: Uuid, owner_id: Uuid, update: NoteUpdate) -> Result<Note>;

    /// Mark a note owned by `owner_id` public. One-way: there is no
    /// corresponding operation to make a note private again.
    async fn mark_public(&self, id: Uuid, owner_id: Uuid) -> Result<()>;

    /// Delete a note owned by `owner_id`.
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<()>;
}

// =============================================================================
// IDENTITY TRAITS
// =============================================================================

/// Resolves a bearer token to an authenticated principal.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate a raw bearer token.
    ///
    /// Returns `Error::Unauthorized` for unknown or revoked tokens.
    async fn authenticate(&self, token: &str) -> Result<AuthPrincipal>;
}

// =============================================================================
// INFERENCE TRAITS
// =============================================================================

/// Backend capable of text generation.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text given a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the backend is available and responding.
    async fn health_check(&self) -> Result<bool>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

/// Backend capable of recognizing text in an image file.
///
/// The recognition language is fixed by the implementation (English here);
/// callers pass only the staged file path.
#[async_trait]
pub trait OcrBackend: Send + Sync {
    /// Recognize text in the image at `path`.
    async fn recognize(&self, path: &Path) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
