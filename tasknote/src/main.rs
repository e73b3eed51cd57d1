//! tasknote - notes and tasks record service
//!
//! Startup order: configuration → logging → storage → HTTP listener.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tasknote::settings::{Overrides, Settings, StorageBackend, SERVICE_NAME};
use tasknote::{build_router, db, AppState};
use tasknote_common::config::{ConfigSource, ServiceConfigLoader};
use tasknote_common::logging::init_logging;
use tokio::signal;
use tracing::{info, warn};

/// Command-line arguments for tasknote
#[derive(Parser, Debug)]
#[command(name = "tasknote")]
#[command(about = "Notes and tasks record service")]
#[command(version)]
struct Args {
    /// Services TOML file (reads the [tasknote.envs] block)
    #[arg(long, env = "CONFIG_FILEPATH")]
    config: Option<PathBuf>,

    /// Per-service .env file
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite connection URL
    #[arg(long)]
    database_url: Option<String>,

    /// Storage backend: sqlite or memory
    #[arg(long)]
    storage: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut loader = ServiceConfigLoader::new(SERVICE_NAME).env_file(&args.env_file);
    if let Some(path) = &args.config {
        loader = loader.config_path(path);
    }
    let config = loader.load();

    let settings = Settings::from_config(&config)
        .and_then(|s| {
            s.apply(Overrides {
                host: args.host,
                port: args.port,
                database_url: args.database_url,
                storage: args.storage,
            })
        })
        .context("Invalid configuration")?;

    init_logging(SERVICE_NAME, &settings.log_level, settings.log_format)?;

    info!(
        "Starting tasknote v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config.source {
        ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
        ConfigSource::EnvironmentOnly => info!("Using environment configuration only"),
    }
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    let state = match settings.storage {
        StorageBackend::Sqlite => {
            let pool = db::connect(&settings.database_url)
                .await
                .with_context(|| format!("Failed to open database {}", settings.database_url))?;
            AppState::with_database(pool)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; records are lost on shutdown");
            AppState::in_memory()
        }
    };

    let app = build_router(state, &settings.api_prefix);

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("tasknote listening on http://{}{}", addr, settings.api_prefix);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("tasknote stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
