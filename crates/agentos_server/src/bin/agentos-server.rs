//! AgentOS side-car server.
//!
//! Serves scene analysis for the story host application over HTTP.

use agentos_server::{AppConfig, AppState, LogFormat, init_logging, serve, shutdown_telemetry};
use agentos_error::{ServerError, ServerErrorKind};
use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Command-line arguments for the side-car.
#[derive(Parser, Debug)]
#[command(name = "agentos-server")]
#[command(about = "AgentOS scene analysis side-car")]
#[command(version)]
struct Args {
    /// Configuration file (defaults to ./agentos.toml when present)
    #[arg(short, long, env = "AGENTOS_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overrides server.bind
    #[arg(short, long, env = "AGENTOS_BIND")]
    bind: Option<String>,

    /// Log line format
    #[arg(long, env = "AGENTOS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();
    init_logging(args.log_format)?;

    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    info!("Starting AgentOS side-car");
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    let state = AppState::from_config(&config)?;
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })
    })?;
    info!(addr = %addr, service = %config.server.service_name, "Listening");

    serve(listener, state, shutdown_signal()).await?;

    info!("Server stopped");
    shutdown_telemetry();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
