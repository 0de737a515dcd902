//! Note-generation batching pipeline.
//!
//! A query of N lines produces exactly `ceil(N / BATCH_LINES)` generation
//! calls, issued strictly one after another; batch N+1 is not started
//! until batch N's response arrived. Responses are concatenated in batch
//! order, and any batch failure aborts the whole request with nothing
//! persisted. Total latency therefore scales linearly with input size.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use notegen_core::{
    batching::{build_prompt, derive_title, split_batches},
    Error, GeneratedNote, GenerationBackend, NewNote, NoteRepository, Result,
};

/// Orchestrates batching, generation, and persistence for one query.
#[derive(Clone)]
pub struct GenerationService {
    notes: Arc<dyn NoteRepository>,
    backend: Arc<dyn GenerationBackend>,
}

impl GenerationService {
    pub fn new(notes: Arc<dyn NoteRepository>, backend: Arc<dyn GenerationBackend>) -> Self {
        Self { notes, backend }
    }

    /// Generate a note from a raw multi-line query and persist it.
    ///
    /// Rejects empty or whitespace-only queries before any external call.
    pub async fn generate_note(&self, owner_id: Uuid, query: &str) -> Result<GeneratedNote> {
        if query.trim().is_empty() {
            return Err(Error::InvalidInput("Query is required".to_string()));
        }

        let start = Instant::now();
        let batches = split_batches(query);
        info!(
            subsystem = "api",
            component = "generation",
            op = "generate",
            owner_id = %owner_id,
            batch_count = batches.len(),
            "Starting note generation"
        );

        let mut content = String::new();
        for (index, batch) in batches.iter().enumerate() {
            let prompt = build_prompt(batch);
            let answer = self.backend.generate(&prompt).await?;
            debug!(
                subsystem = "api",
                component = "generation",
                batch = index,
                response_len = answer.len(),
                "Batch complete"
            );
            content.push('\n');
            content.push_str(&answer);
        }

        // The per-batch separator leaves a stray leading newline; drop it.
        let content = content.trim_start_matches('\n').to_string();
        if content.trim().is_empty() {
            return Err(Error::Inference(
                "generation backend returned empty content".to_string(),
            ));
        }

        let title = derive_title(query);
        let id = self
            .notes
            .insert(NewNote {
                owner_id,
                title: title.clone(),
                content: content.clone(),
            })
            .await?;

        info!(
            subsystem = "api",
            component = "generation",
            op = "generate",
            note_id = %id,
            batch_count = batches.len(),
            response_len = content.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Note generated"
        );
        Ok(GeneratedNote { id, title, content })
    }
}
