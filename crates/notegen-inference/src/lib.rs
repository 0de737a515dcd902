//! # notegen-inference
//!
//! Generation and OCR backends for notegen.
//!
//! The HTTP layer only ever sees the [`notegen_core::GenerationBackend`] and
//! [`notegen_core::OcrBackend`] traits; this crate supplies the Ollama-backed
//! implementations plus a deterministic mock for tests.

pub mod mock;
pub mod ocr;
pub mod ollama;

pub use mock::MockGenerationBackend;
pub use ocr::OllamaOcrBackend;
pub use ollama::OllamaBackend;
