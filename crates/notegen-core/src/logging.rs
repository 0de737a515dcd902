//! Structured logging field name constants for notegen.
//!
//! All crates use these constants for consistent structured logging fields so
//! log aggregation tools can query by standardized names across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |

/// Subsystem originating the log event.
/// Values: "api", "db", "inference", "extract"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "ollama", "pool", "dispatcher", "staging"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "generate", "parse_file", "mark_public"
pub const OPERATION: &str = "op";

/// Note UUID being operated on.
pub const NOTE_ID: &str = "note_id";

/// Owner UUID scoping the operation.
pub const OWNER_ID: &str = "owner_id";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Byte length of a prompt sent to the generation backend.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

/// Number of batches a query was partitioned into.
pub const BATCH_COUNT: &str = "batch_count";

/// Declared MIME type of an uploaded file.
pub const CONTENT_TYPE: &str = "content_type";

/// Staged path of an uploaded file.
pub const STAGED_PATH: &str = "staged_path";
