//! Upload staging: temporary on-disk persistence of an uploaded file.
//!
//! A staged file is an exclusively-owned resource of the request that
//! created it. The name combines a millisecond timestamp, a random suffix,
//! and the original extension, so concurrent uploads of the same filename
//! never collide. Cleanup is best-effort: a failed delete is logged and
//! never escalates into the request's primary error.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;
use tracing::{debug, warn};

use notegen_core::Result;

/// An uploaded file persisted to the staging directory.
#[derive(Debug)]
pub struct StagedUpload {
    path: PathBuf,
    /// Filename as sent by the client.
    pub original_name: String,
    /// Declared MIME type from the multipart part.
    pub content_type: String,
}

impl StagedUpload {
    /// Write `data` to a collision-resistant path under `staging_dir`.
    pub async fn stage(
        staging_dir: &Path,
        original_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<Self> {
        fs::create_dir_all(staging_dir).await?;

        let extension = Path::new(original_name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let filename = format!(
            "{}-{}{}",
            Utc::now().timestamp_millis(),
            rand::random::<u32>(),
            extension
        );
        let path = staging_dir.join(filename);

        fs::write(&path, data).await?;
        debug!(
            subsystem = "extract",
            component = "staging",
            op = "stage",
            staged_path = %path.display(),
            size = data.len(),
            "Upload staged"
        );

        Ok(Self {
            path,
            original_name: original_name.to_string(),
            content_type: content_type.to_string(),
        })
    }

    /// Path of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staged file. Best-effort: failures are logged at WARN and
    /// swallowed so they never mask the extraction outcome.
    pub async fn cleanup(self) {
        if let Err(e) = fs::remove_file(&self.path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    subsystem = "extract",
                    component = "staging",
                    op = "cleanup",
                    staged_path = %self.path.display(),
                    error = %e,
                    "Failed to remove staged upload"
                );
            }
        }
    }
}
