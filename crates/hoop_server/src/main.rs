//! HoopTrack server binary.

mod routes;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hoop_core::config;

use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "hooptrack-server", about = "Basketball video tracking service")]
struct Args {
    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Output directory for annotated videos and tracking data (overrides config)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut settings = config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(output_dir) = args.output_dir {
        settings.paths.output_dir = output_dir;
    }

    std::fs::create_dir_all(&settings.paths.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            settings.paths.output_dir.display()
        )
    })?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = Arc::new(AppState::new(settings));
    tracing::info!(
        "Output directory: {}",
        state.pipeline.output_dir().display()
    );

    let app = routes::router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("HoopTrack server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
