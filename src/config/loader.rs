//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PrometheusConfig;
use super::secret::secret_string;
use crate::domain::errors::PrometheusError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PrometheusConfig
/// 4. Applies environment variable overrides (PROMETHEUS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use prometheus::config::loader::load_config;
///
/// let config = load_config("prometheus.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PrometheusConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PrometheusError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PrometheusError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from a file, falling back to defaults when it is absent
///
/// Environment overrides and validation still apply to the defaults, so a
/// server can be configured purely through `PROMETHEUS_*` variables.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PrometheusConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
    finish(PrometheusConfig::default())
}

/// Parses configuration from TOML text
///
/// # Errors
///
/// Returns an error if substitution, parsing or validation fails
pub fn load_config_from_str(contents: &str) -> Result<PrometheusConfig> {
    let contents = substitute_env_vars(contents)?;

    let config: PrometheusConfig = toml::from_str(&contents)
        .map_err(|e| PrometheusError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

fn finish(mut config: PrometheusConfig) -> Result<PrometheusConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PrometheusError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| {
        PrometheusError::Configuration(format!("Invalid substitution pattern: {}", e))
    })?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PrometheusError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using PROMETHEUS_* prefix
///
/// Environment variables follow the pattern: PROMETHEUS_<SECTION>_<KEY>
/// For example: PROMETHEUS_SERVER_PORT, PROMETHEUS_STORAGE_DATA_DIR
///
/// # Errors
///
/// Returns an error if a numeric or boolean override cannot be parsed
fn apply_env_overrides(config: &mut PrometheusConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("PROMETHEUS_APPLICATION_NAME") {
        config.application.name = val;
    }
    if let Ok(val) = std::env::var("PROMETHEUS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Server overrides
    if let Ok(val) = std::env::var("PROMETHEUS_SERVER_HOST") {
        config.server.host = val;
    }
    if let Ok(val) = std::env::var("PROMETHEUS_SERVER_PORT") {
        config.server.port = parse_override("PROMETHEUS_SERVER_PORT", &val)?;
    }
    if let Ok(val) = std::env::var("PROMETHEUS_SERVER_CORS_ORIGINS") {
        config.server.cors_origins = val
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();
    }

    // Storage overrides
    if let Ok(val) = std::env::var("PROMETHEUS_STORAGE_DATA_DIR") {
        config.storage.data_dir = val;
    }
    if let Ok(val) = std::env::var("PROMETHEUS_STORAGE_COURSES_FILE") {
        config.storage.courses_file = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("PROMETHEUS_EXPORT_EXPORT_DIR") {
        config.export.export_dir = val;
    }

    // Generator overrides
    if let Ok(val) = std::env::var("PROMETHEUS_GENERATOR_PROVIDER") {
        config.generator.provider = val;
    }
    if let Ok(val) = std::env::var("PROMETHEUS_GENERATOR_MODEL") {
        config.generator.model = val;
    }
    if let Ok(val) = std::env::var("PROMETHEUS_GENERATOR_MAX_TOKENS") {
        config.generator.max_tokens = parse_override("PROMETHEUS_GENERATOR_MAX_TOKENS", &val)?;
    }
    if let Ok(val) = std::env::var("PROMETHEUS_GENERATOR_API_KEY") {
        config.generator.api_key = Some(secret_string(val));
    }

    // Lexicon overrides
    if let Ok(val) = std::env::var("PROMETHEUS_LEXICON_PATH") {
        config.lexicon.path = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PROMETHEUS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("PROMETHEUS_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("PROMETHEUS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PROMETHEUS_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| {
        PrometheusError::Configuration(format!("Invalid value for {}: {} ({})", name, value, e))
    })
}
