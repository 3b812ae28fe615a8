//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Prometheus configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading already runs validation, so a parsed config is a valid one
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Bind Address: {}", config.server.bind_address());
        println!("  CORS Origins: {}", config.server.cors_origins.join(", "));
        println!(
            "  Courses File: {}",
            config.storage.courses_path().display()
        );
        println!("  Export Directory: {}", config.export.export_dir);
        println!(
            "  Generator: {} (model {}, max {} tokens)",
            config.generator.provider, config.generator.model, config.generator.max_tokens
        );
        println!(
            "  Generator API Key: {}",
            if config.generator.has_api_key() {
                "configured"
            } else {
                "not set"
            }
        );
        println!(
            "  Lexicon: {}",
            config.lexicon.path.as_deref().unwrap_or("built-in")
        );
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_validate_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let code = ValidateArgs {}.execute(path.to_str().unwrap()).await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_accepts_minimal_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prometheus.toml");
        std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let code = ValidateArgs {}.execute(path.to_str().unwrap()).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_rejects_bad_log_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prometheus.toml");
        std::fs::write(&path, "[application]\nlog_level = \"loud\"\n").unwrap();

        let code = ValidateArgs {}.execute(path.to_str().unwrap()).await.unwrap();
        assert_eq!(code, 2);
    }
}
