use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use doctext_ingest::Extractor;
use doctext_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doctext_web=info".into()),
        )
        .init();

    let extractor = Extractor::new();
    if extractor.pdf_available() {
        tracing::info!("PDF backend loaded (MuPDF)");
    } else {
        tracing::warn!("PDF backend unavailable; .pdf uploads will fail with a descriptive error");
    }

    // Optional parent for per-request upload temp dirs, created up front
    let upload_root = std::env::var("UPLOAD_DIR").ok().map(PathBuf::from);
    if let Some(ref dir) = upload_root {
        std::fs::create_dir_all(dir)?;
        tracing::info!(dir = %dir.display(), "upload directory ready");
    }

    let max_body_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(50 * 1024 * 1024);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000);

    let state = Arc::new(AppState {
        extractor: Arc::new(extractor),
        upload_root,
    });

    let app = doctext_web::app(state, max_body_bytes);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
