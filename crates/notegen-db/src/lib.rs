//! # notegen-db
//!
//! PostgreSQL database layer for notegen.
//!
//! This crate provides:
//! - Connection pool management
//! - The note repository (owner-scoped CRUD plus the public shared view)
//! - The API-key identity provider
//!
//! ## Example
//!
//! ```rust,ignore
//! use notegen_db::Database;
//! use notegen_core::{NewNote, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/notegen").await?;
//!
//!     let note_id = db.notes.insert(NewNote {
//!         owner_id: owner,
//!         title: "Hello".to_string(),
//!         content: "# Hello, world!".to_string(),
//!     }).await?;
//!
//!     println!("Created note: {}", note_id);
//!     Ok(())
//! }
//! ```

pub mod identity;
pub mod notes;
pub mod pool;

pub use identity::{hash_token, PgIdentityProvider};
pub use notes::PgNoteRepository;
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};

// Re-export core types
pub use notegen_core::*;

/// Aggregated database handle: one pool, one repository per entity.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::PgPool,
    /// Note repository for CRUD operations.
    pub notes: PgNoteRepository,
    /// API-key identity provider.
    pub identity: PgIdentityProvider,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            identity: PgIdentityProvider::new(pool.clone()),
            pool,
        }
    }

    /// Connect to the database and run pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url).await?;
        let db = Self::new(pool);
        db.migrate().await?;
        Ok(db)
    }

    /// Run embedded migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Internal(format!("Migration failed: {}", e)))?;
        Ok(())
    }
}
