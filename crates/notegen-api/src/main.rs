//! notegen-api - HTTP API server for notegen.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notegen_api::AppState;
use notegen_core::{defaults, GenerationBackend, OcrBackend};
use notegen_db::Database;
use notegen_extract::FileDispatcher;
use notegen_inference::{OllamaBackend, OllamaOcrBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db = Database::connect(&database_url).await?;

    let metrics_pool = db.pool.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            notegen_db::log_pool_metrics(&metrics_pool);
        }
    });

    let generator = Arc::new(OllamaBackend::from_env());
    info!(
        subsystem = "api",
        op = "startup",
        model = generator.model_name(),
        "Generation backend configured"
    );

    let ocr: Option<Arc<dyn OcrBackend>> = match OllamaOcrBackend::from_env() {
        Some(backend) => {
            info!(
                subsystem = "api",
                op = "startup",
                model = backend.model_name(),
                "OCR backend configured"
            );
            Some(Arc::new(backend))
        }
        None => {
            warn!(
                subsystem = "api",
                op = "startup",
                "{} not set; image uploads will be rejected",
                defaults::ENV_OLLAMA_VISION_MODEL
            );
            None
        }
    };
    let dispatcher = Arc::new(FileDispatcher::new(ocr));

    let staging_dir = std::env::var(defaults::ENV_STAGING_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("notegen-uploads"));
    tokio::fs::create_dir_all(&staging_dir)
        .await
        .with_context(|| format!("creating staging dir {}", staging_dir.display()))?;

    let state = AppState::new(
        Arc::new(db.notes.clone()),
        Arc::new(db.identity.clone()),
        generator,
        dispatcher,
        staging_dir,
    );

    let bind_addr = std::env::var(defaults::ENV_BIND_ADDR)
        .unwrap_or_else(|_| defaults::BIND_ADDR.to_string());
    let addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("invalid bind address {}", bind_addr))?;

    info!(
        subsystem = "api",
        op = "startup",
        addr = %addr,
        "notegen-api listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, notegen_api::router(state)).await?;
    Ok(())
}
