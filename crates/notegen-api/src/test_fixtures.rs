//! In-memory collaborator implementations for tests.
//!
//! Always compiled so integration tests (in `tests/`) can use them; nothing
//! here touches a real database or model backend.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use notegen_core::{
    defaults::MANUAL_TITLE_FALLBACK, AuthPrincipal, Error, IdentityProvider, NewNote, Note,
    NoteRepository, NoteUpdate, Result, SharedNote,
};

/// In-memory [`NoteRepository`] with the same ownership semantics as the
/// PostgreSQL implementation.
#[derive(Default)]
pub struct MemoryNoteRepository {
    notes: Mutex<Vec<Note>>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch a note by id regardless of owner or visibility.
    pub fn get(&self, id: Uuid) -> Option<Note> {
        self.notes.lock().unwrap().iter().find(|n| n.id == id).cloned()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn insert(&self, note: NewNote) -> Result<Uuid> {
        let id = Uuid::now_v7();
        let now = Utc::now();
        // Same blank-title fallback as the PostgreSQL repository.
        let title = if note.title.trim().is_empty() {
            MANUAL_TITLE_FALLBACK.to_string()
        } else {
            note.title
        };
        self.notes.lock().unwrap().push(Note {
            id,
            owner_id: note.owner_id,
            title,
            content: note.content,
            is_public: false,
            created_at_utc: now,
            updated_at_utc: now,
        });
        Ok(id)
    }

    async fn fetch_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Note> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id && n.owner_id == owner_id)
            .cloned()
            .ok_or(Error::NoteNotFound(id))
    }

    async fn fetch_public(&self, id: Uuid) -> Result<SharedNote> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id && n.is_public)
            .map(|n| SharedNote {
                id: n.id,
                title: n.title.clone(),
                content: n.content.clone(),
                owner_name: "Anonymous".to_string(),
                created_at_utc: n.created_at_utc,
                updated_at_utc: n.updated_at_utc,
            })
            .ok_or(Error::NoteNotFound(id))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.owner_id == owner_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.created_at_utc.cmp(&a.created_at_utc));
        Ok(notes)
    }

    async fn update(&self, id: Uuid, owner_id: Uuid, update: NoteUpdate) -> Result<Note> {
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id && n.owner_id == owner_id)
            .ok_or(Error::NoteNotFound(id))?;
        if let Some(title) = update.title {
            note.title = title;
        }
        note.content = update.content;
        note.updated_at_utc = Utc::now();
        Ok(note.clone())
    }

    async fn mark_public(&self, id: Uuid, owner_id: Uuid) -> Result<()> {
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id && n.owner_id == owner_id)
            .ok_or(Error::NoteNotFound(id))?;
        note.is_public = true;
        note.updated_at_utc = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<()> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| !(n.id == id && n.owner_id == owner_id));
        if notes.len() == before {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }
}

/// [`IdentityProvider`] accepting exactly one token.
pub struct StaticIdentityProvider {
    token: String,
    principal: AuthPrincipal,
}

impl StaticIdentityProvider {
    pub fn new(token: impl Into<String>, principal: AuthPrincipal) -> Self {
        Self {
            token: token.into(),
            principal,
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn authenticate(&self, token: &str) -> Result<AuthPrincipal> {
        if token == self.token {
            Ok(self.principal.clone())
        } else {
            Err(Error::Unauthorized("invalid API token".to_string()))
        }
    }
}
