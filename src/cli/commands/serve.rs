//! Serve command implementation
//!
//! Runs the HTTP API until SIGINT or SIGTERM, then drains in-flight
//! requests before exiting.

use crate::api::{self, AppState};
use crate::config::load_config_or_default;
use crate::logging::init_logging;
use clap::Args;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    ///
    /// Installs its own logger so the configured file layer is honoured.
    pub async fn execute(
        &self,
        config_path: &str,
        log_level: Option<&str>,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let level = log_level
            .unwrap_or(&config.application.log_level)
            .to_string();
        let _guard = match init_logging(&level, &config.logging) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Failed to initialize logging: {e}");
                return Ok(5);
            }
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            name = %config.application.name,
            courses_file = %config.storage.courses_path().display(),
            export_dir = %config.export.export_dir,
            "Starting Prometheus API"
        );

        let bind_address = config.server.bind_address();

        let state = match AppState::from_config(config).await {
            Ok(s) => s,
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to prepare storage");
                eprintln!("❌ Failed to prepare storage: {e}");
                return Ok(4); // Storage error exit code
            }
        };

        let listener = match TcpListener::bind(&bind_address).await {
            Ok(l) => l,
            Err(e) => {
                tracing::error!(address = %bind_address, error = %e, "Failed to bind");
                eprintln!("❌ Failed to bind {bind_address}: {e}");
                return Ok(5);
            }
        };

        api::serve(state, listener, shutdown_signal).await?;

        tracing::info!("Server stopped");
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_serve_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prometheus.toml");
        std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();

        let (_tx, rx) = watch::channel(false);
        let code = ServeArgs::default()
            .execute(path.to_str().unwrap(), None, rx)
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
