//! Service layer for notegen-api.

pub mod generation;

pub use generation::GenerationService;
