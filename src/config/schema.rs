//! Configuration schema types
//!
//! This module defines the configuration structure for Prometheus. Every
//! section has defaults, so an empty file is a valid configuration.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Prometheus configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrometheusConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Course collection file location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Content generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Reference data settings
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PrometheusConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.server.validate()?;
        self.storage.validate()?;
        self.export.validate()?;
        self.generator.validate()?;
        self.lexicon.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Service name reported by the root endpoint
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("application.name cannot be empty".to_string());
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port (0 picks an ephemeral port)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to make credentialed cross-origin requests
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("server.host cannot be empty".to_string());
        }

        for origin in &self.cors_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(format!(
                    "server.cors_origins entries must start with http:// or https://, got '{}'",
                    origin
                ));
            }
        }
        Ok(())
    }

    /// `host:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

/// Course collection storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the collection file
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Collection file name inside `data_dir`
    #[serde(default = "default_courses_file")]
    pub courses_file: String,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.data_dir.trim().is_empty() {
            return Err("storage.data_dir cannot be empty".to_string());
        }

        if self.courses_file.trim().is_empty() {
            return Err("storage.courses_file cannot be empty".to_string());
        }

        if self.courses_file.contains('/') || self.courses_file.contains('\\') {
            return Err(format!(
                "storage.courses_file must be a bare file name, got '{}'",
                self.courses_file
            ));
        }
        Ok(())
    }

    /// Full path of the collection file
    pub fn courses_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.courses_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            courses_file: default_courses_file(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving exported files
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.export_dir.trim().is_empty() {
            return Err("export.export_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
        }
    }
}

/// Content generator configuration
///
/// The generator is a deterministic template engine; the model and key are
/// reported by the status endpoint and reserved for a hosted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Content provider (only `template` is built in)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model name reported by the status endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// Token ceiling per generation request
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// API key for a hosted model (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<SecretString>,
}

impl GeneratorConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_providers = ["template"];
        if !valid_providers.contains(&self.provider.as_str()) {
            return Err(format!(
                "Invalid generator.provider '{}'. Must be one of: {}",
                self.provider,
                valid_providers.join(", ")
            ));
        }

        if self.model.trim().is_empty() {
            return Err("generator.model cannot be empty".to_string());
        }

        if self.max_tokens == 0 || self.max_tokens > 128_000 {
            return Err(format!(
                "generator.max_tokens must be between 1 and 128000, got {}",
                self.max_tokens
            ));
        }
        Ok(())
    }

    /// Whether an API key is present and non-blank
    pub fn has_api_key(&self) -> bool {
        use secrecy::ExposeSecret;

        self.api_key
            .as_ref()
            .map(|key| !key.expose_secret().is_empty())
            .unwrap_or(false)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_key: None,
        }
    }
}

/// Reference data configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// JSON file replacing the built-in lexicon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl LexiconConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.path {
            if path.trim().is_empty() {
                return Err("lexicon.path cannot be empty when set".to_string());
            }
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "Prometheus Course Generation System".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_courses_file() -> String {
    "courses.json".to_string()
}

fn default_export_dir() -> String {
    "exports".to_string()
}

fn default_provider() -> String {
    "template".to_string()
}

fn default_model() -> String {
    "placeholder".to_string()
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
