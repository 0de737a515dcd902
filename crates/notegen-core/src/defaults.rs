//! Centralized default constants for the notegen system.
//!
//! All crates reference these constants instead of defining their own magic
//! numbers. Organized by domain area.

// =============================================================================
// GENERATION
// =============================================================================

/// Default Ollama endpoint.
pub const OLLAMA_URL: &str = "http://localhost:11434";

/// Default generation model.
pub const GEN_MODEL: &str = "qwen3:8b";

/// Timeout for generation requests (seconds). Generous because a single
/// note-generation request issues one model call per query batch.
pub const GEN_TIMEOUT_SECS: u64 = 120;

/// Env var overriding the generation timeout.
pub const ENV_GEN_TIMEOUT_SECS: &str = "NOTEGEN_GEN_TIMEOUT_SECS";

// =============================================================================
// OCR (vision model transcription)
// =============================================================================

/// Env var naming the vision model used for image OCR.
/// Unset or empty disables image uploads.
pub const ENV_OLLAMA_VISION_MODEL: &str = "OLLAMA_VISION_MODEL";

/// Timeout for OCR requests (seconds).
pub const OCR_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// UPLOAD STAGING
// =============================================================================

/// Env var overriding the staging directory for uploaded files.
pub const ENV_STAGING_DIR: &str = "NOTEGEN_STAGING_DIR";

/// Maximum accepted upload size in bytes (25 MiB).
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

// =============================================================================
// SERVER
// =============================================================================

/// Env var for the HTTP bind address.
pub const ENV_BIND_ADDR: &str = "NOTEGEN_BIND_ADDR";

/// Default HTTP bind address.
pub const BIND_ADDR: &str = "0.0.0.0:3113";

/// Fallback note title when a generated note's query has no usable first line.
pub const GENERATED_TITLE_FALLBACK: &str = "AI Generated Note";

/// Default title for manually saved notes without one.
pub const MANUAL_TITLE_FALLBACK: &str = "Untitled Note";

/// Maximum characters kept from the query's first line when deriving a title.
pub const TITLE_MAX_CHARS: usize = 50;
