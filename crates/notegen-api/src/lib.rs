//! # notegen-api
//!
//! HTTP API server for notegen.
//!
//! Exposes the note-generation pipeline, note CRUD/share operations, and the
//! file-ingestion dispatcher over axum. All collaborators (persistence,
//! identity, generation, OCR) are held as trait objects in [`AppState`], so
//! the full router can be exercised in tests with in-memory fakes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod test_fixtures;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderName,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use notegen_core::{defaults, GenerationBackend, IdentityProvider, NoteRepository};
use notegen_extract::FileDispatcher;

pub use error::ApiError;
use services::GenerationService;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically. That makes
/// log correlation easier when tracing a generation request across batches.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Note persistence.
    pub notes: Arc<dyn NoteRepository>,
    /// Bearer-token resolution.
    pub identity: Arc<dyn IdentityProvider>,
    /// Generation backend (health endpoint reports on it).
    pub generator: Arc<dyn GenerationBackend>,
    /// Batching pipeline over notes + generator.
    pub generation: GenerationService,
    /// Upload extraction dispatcher.
    pub dispatcher: Arc<FileDispatcher>,
    /// Directory uploads are staged into.
    pub staging_dir: PathBuf,
}

impl AppState {
    pub fn new(
        notes: Arc<dyn NoteRepository>,
        identity: Arc<dyn IdentityProvider>,
        generator: Arc<dyn GenerationBackend>,
        dispatcher: Arc<FileDispatcher>,
        staging_dir: PathBuf,
    ) -> Self {
        let generation = GenerationService::new(notes.clone(), generator.clone());
        Self {
            notes,
            identity,
            generator,
            generation,
            dispatcher,
            staging_dir,
        }
    }
}

/// Build the application router with all routes and middleware layers.
pub fn router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/notes/generate", post(handlers::notes::generate_note))
        .route(
            "/api/notes/manual-save",
            post(handlers::notes::save_manual_note),
        )
        .route("/api/notes", get(handlers::notes::list_notes))
        .route(
            "/api/notes/shared/:id",
            get(handlers::notes::get_shared_note),
        )
        .route(
            "/api/notes/:id",
            get(handlers::notes::get_note)
                .put(handlers::notes::update_note)
                .delete(handlers::notes::delete_note),
        )
        .route("/api/notes/:id/share", put(handlers::notes::share_note))
        .route("/api/files/parse", post(handlers::files::parse_file))
        .layer(DefaultBodyLimit::max(defaults::MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(
            request_id_header,
            MakeRequestUuidV7,
        ))
        .with_state(state)
}
