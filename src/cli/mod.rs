//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Prometheus using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Prometheus - Course Authoring Backend
#[derive(Parser, Debug)]
#[command(name = "prometheus")]
#[command(version, about, long_about = None)]
#[command(author = "Prometheus Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "prometheus.toml", env = "PROMETHEUS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PROMETHEUS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// List stored courses
    List(commands::list::ListArgs),

    /// Export a single course to a file
    Export(commands::export::ExportArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::ExportFormat;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["prometheus", "serve"]);
        assert_eq!(cli.config, "prometheus.toml");
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn test_cli_parse_serve_with_port() {
        let cli = Cli::parse_from(["prometheus", "serve", "--port", "9000"]);
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(9000)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["prometheus", "--config", "custom.toml", "serve"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["prometheus", "--log-level", "debug", "list"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["prometheus", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["prometheus", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_list_filters() {
        let cli = Cli::parse_from(["prometheus", "list", "--level", "expert", "--title", "lead"]);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.level.as_deref(), Some("expert"));
                assert_eq!(args.title.as_deref(), Some("lead"));
                assert!(args.status.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from([
            "prometheus",
            "export",
            "--course-id",
            "abc",
            "--format",
            "scorm",
            "--no-metadata",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.course_id, "abc");
                assert_eq!(args.format, ExportFormat::Scorm);
                assert!(args.no_metadata);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_export_format() {
        let result = Cli::try_parse_from([
            "prometheus",
            "export",
            "--course-id",
            "abc",
            "--format",
            "epub",
        ]);
        assert!(result.is_err());
    }
}
