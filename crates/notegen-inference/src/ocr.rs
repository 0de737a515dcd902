//! OCR backend built on an Ollama vision model.
//!
//! Recognition language is fixed to English via the transcription prompt;
//! the dispatcher only ever hands over a staged image path.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use notegen_core::{defaults, Error, OcrBackend, Result};

/// Fixed transcription prompt. The model is asked for verbatim English text
/// only, with no description or commentary.
const OCR_PROMPT: &str = "Transcribe all English text visible in this image. \
Return only the recognized text, preserving line breaks. \
Do not describe the image or add commentary.";

/// Ollama vision-model OCR backend (e.g. qwen3-vl, llava).
pub struct OllamaOcrBackend {
    base_url: String,
    model: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl OllamaOcrBackend {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url,
            model,
            client: reqwest::Client::new(),
            timeout_secs: defaults::OCR_TIMEOUT_SECS,
        }
    }

    /// Create from environment variables.
    /// Returns None if `OLLAMA_VISION_MODEL` is not set (image uploads
    /// are then rejected at the dispatch layer).
    pub fn from_env() -> Option<Self> {
        let model = std::env::var(defaults::ENV_OLLAMA_VISION_MODEL).ok()?;
        if model.is_empty() {
            return None;
        }
        let base_url = std::env::var("OLLAMA_BASE")
            .unwrap_or_else(|_| defaults::OLLAMA_URL.to_string());
        Some(Self::new(base_url, model))
    }
}

#[derive(Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    images: Vec<String>, // base64 encoded
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

#[async_trait]
impl OcrBackend for OllamaOcrBackend {
    async fn recognize(&self, path: &Path) -> Result<String> {
        use base64::Engine;

        let image_data = tokio::fs::read(path).await?;
        let image_b64 = base64::engine::general_purpose::STANDARD.encode(&image_data);

        debug!(
            subsystem = "inference",
            component = "ocr",
            op = "recognize",
            model = %self.model,
            image_bytes = image_data.len(),
            "Submitting image for transcription"
        );

        let request = OllamaGenerateRequest {
            model: self.model.clone(),
            prompt: OCR_PROMPT.to_string(),
            images: vec![image_b64],
            stream: false,
        };

        let url = format!("{}/api/generate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| Error::Inference(format!("OCR request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "OCR backend returned {}: {}",
                status, body
            )));
        }

        let result: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse OCR response: {}", e)))?;

        Ok(result.response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_reports_configured_model() {
        let backend = OllamaOcrBackend::new("http://localhost:11434".into(), "llava".into());
        assert_eq!(backend.model_name(), "llava");
    }

    #[tokio::test]
    async fn test_recognize_missing_file_is_io_error() {
        let backend = OllamaOcrBackend::new("http://localhost:11434".into(), "llava".into());
        let err = backend
            .recognize(Path::new("/nonexistent/image.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
