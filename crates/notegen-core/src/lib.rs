//! # notegen-core
//!
//! Core types, traits, and abstractions for the notegen server.
//!
//! This crate provides the foundational data structures, the shared error
//! type, and the pure query-batching logic that the other notegen crates
//! depend on.

pub mod batching;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use batching::{derive_title, split_batches, BATCH_LINES, FORMAT_INSTRUCTIONS};
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
