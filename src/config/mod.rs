//! Configuration management for Prometheus.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Prometheus uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PROMETHEUS_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use prometheus::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("prometheus.toml")?;
//!
//! println!("Listening on {}", config.server.bind_address());
//! println!("Courses stored in {}", config.storage.courses_path().display());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Service name and log level
//! - [`ServerConfig`] - Bind address and CORS origins
//! - [`StorageConfig`] - Location of the course collection file
//! - [`ExportConfig`] - Export output directory
//! - [`GeneratorConfig`] - Content generator provider and credentials
//! - [`LexiconConfig`] - Optional reference data override
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//! cors_origins = ["http://localhost:3000"]
//!
//! [storage]
//! data_dir = "data"
//!
//! [generator]
//! api_key = "${PROMETHEUS_API_KEY}"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str, load_config_or_default};
pub use schema::{
    ApplicationConfig, ExportConfig, GeneratorConfig, LexiconConfig, LoggingConfig,
    PrometheusConfig, ServerConfig, StorageConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
