//! Mock generation backend for deterministic testing.
//!
//! Records every prompt it receives and replays scripted responses in
//! order, so pipeline tests can assert call counts, call contents, and
//! response ordering without a live model.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let backend = MockGenerationBackend::new().with_fixed_response("answer");
//! let out = backend.generate("prompt").await?;
//! assert_eq!(out, "answer");
//! assert_eq!(backend.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use notegen_core::{Error, GenerationBackend, Result};

/// Mock generation backend for testing.
#[derive(Clone)]
pub struct MockGenerationBackend {
    default_response: String,
    scripted: Arc<Mutex<VecDeque<std::result::Result<String, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGenerationBackend {
    /// Create a new mock backend returning `"Mock response"` for every call.
    pub fn new() -> Self {
        Self {
            default_response: "Mock response".to_string(),
            scripted: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the response returned when no scripted response remains.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        self.default_response = response.into();
        self
    }

    /// Queue a successful response; scripted responses are consumed in order.
    pub fn push_response(&self, response: impl Into<String>) {
        self.scripted.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Queue a failure for the next call.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.scripted.lock().unwrap().push_back(Err(message.into()));
    }

    /// All prompts received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());
        match self.scripted.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(Error::Inference(message)),
            None => Ok(self.default_response.clone()),
        }
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_responses_consumed_in_order() {
        let backend = MockGenerationBackend::new();
        backend.push_response("first");
        backend.push_response("second");

        assert_eq!(backend.generate("a").await.unwrap(), "first");
        assert_eq!(backend.generate("b").await.unwrap(), "second");
        // Exhausted script falls back to the default.
        assert_eq!(backend.generate("c").await.unwrap(), "Mock response");
        assert_eq!(backend.calls(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_scripted_failure_surfaces_as_inference_error() {
        let backend = MockGenerationBackend::new();
        backend.push_failure("model down");

        let err = backend.generate("x").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
        assert_eq!(backend.call_count(), 1);
    }
}
