//! Note repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::debug;
use uuid::Uuid;

use notegen_core::{
    defaults::MANUAL_TITLE_FALLBACK, Error, NewNote, Note, NoteRepository, NoteUpdate, Result,
    SharedNote,
};

/// PostgreSQL implementation of [`NoteRepository`].
///
/// Ownership is enforced inside every owner-scoped query: a note that exists
/// but belongs to someone else is indistinguishable from a missing one.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const NOTE_COLUMNS: &str =
    "id, owner_id, title, content, is_public, created_at_utc, updated_at_utc";

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, note: NewNote) -> Result<Uuid> {
        let id = Uuid::now_v7();
        let title = if note.title.trim().is_empty() {
            MANUAL_TITLE_FALLBACK.to_string()
        } else {
            note.title
        };

        sqlx::query(
            "INSERT INTO note (id, owner_id, title, content, is_public)
             VALUES ($1, $2, $3, $4, false)",
        )
        .bind(id)
        .bind(note.owner_id)
        .bind(&title)
        .bind(&note.content)
        .execute(&self.pool)
        .await?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "insert",
            note_id = %id,
            owner_id = %note.owner_id,
            "Note created"
        );
        Ok(id)
    }

    async fn fetch_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Note> {
        sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM note WHERE id = $1 AND owner_id = $2"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(Error::NoteNotFound(id))
    }

    async fn fetch_public(&self, id: Uuid) -> Result<SharedNote> {
        let row = sqlx::query(
            "SELECT n.id, n.title, n.content, n.created_at_utc, n.updated_at_utc,
                    COALESCE(u.name, 'Anonymous') AS owner_name
             FROM note n
             LEFT JOIN user_account u ON u.id = n.owner_id
             WHERE n.id = $1 AND n.is_public = true",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(Error::NoteNotFound(id))?;

        Ok(SharedNote {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
            owner_name: row.get("owner_name"),
            created_at_utc: row.get("created_at_utc"),
            updated_at_utc: row.get("updated_at_utc"),
        })
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM note
             WHERE owner_id = $1
             ORDER BY created_at_utc DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn update(&self, id: Uuid, owner_id: Uuid, update: NoteUpdate) -> Result<Note> {
        // COALESCE keeps the stored title when the caller sends none.
        sqlx::query_as::<_, Note>(&format!(
            "UPDATE note
             SET title = COALESCE($3, title),
                 content = $4,
                 updated_at_utc = now()
             WHERE id = $1 AND owner_id = $2
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(id)
        .bind(owner_id)
        .bind(update.title)
        .bind(&update.content)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(Error::NoteNotFound(id))
    }

    async fn mark_public(&self, id: Uuid, owner_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE note SET is_public = true, updated_at_utc = now()
             WHERE id = $1 AND owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        debug!(
            subsystem = "db",
            component = "notes",
            op = "mark_public",
            note_id = %id,
            "Note shared"
        );
        Ok(())
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }
}
