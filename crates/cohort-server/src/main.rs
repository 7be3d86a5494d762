use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::LevelFilter;

use cohort_core::predictor::Predictor;
use cohort_server::server::app;

/// The process exposes no flags; the port matches the original service and
/// the artifacts sit next to the executable.
const BIND_ADDR: &str = "127.0.0.1:8000";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("COHORT_LOG", "info"))
        .init();

    let artifact_dir = artifact_dir()?;
    log::info!("loading artifacts from {}", artifact_dir.display());

    // Artifacts must load before the socket is bound: a process that cannot
    // predict must not accept traffic.
    let predictor = match Predictor::from_artifact_dir(&artifact_dir) {
        Ok(p) => Arc::new(p),
        Err(e) => {
            log::error!("refusing to start: {}", e);
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(BIND_ADDR)
        .await
        .with_context(|| format!("failed to bind {}", BIND_ADDR))?;
    log::info!("listening on http://{}", BIND_ADDR);

    axum::serve(listener, app(predictor))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    log::info!("server shut down");
    Ok(())
}

/// Artifacts live in the serving binary's own directory, mirroring the
/// original deployment layout.
fn artifact_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot resolve executable path")?;
    let dir = exe
        .parent()
        .context("executable has no parent directory")?;
    Ok(dir.to_path_buf())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for ctrl+c: {}", e);
        return;
    }
    log::info!("received shutdown signal");
}
