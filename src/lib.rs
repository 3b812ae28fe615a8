// Prometheus - Course Authoring Backend
// Copyright (c) 2025 Prometheus Contributors
// Licensed under the MIT License

//! # Prometheus - Course Authoring Backend
//!
//! Prometheus stores training courses, fills them with deterministic template
//! content and exports them to downloadable files, all behind a JSON HTTP API.
//!
//! ## Overview
//!
//! - **Courses** are kept in a single JSON collection file with create, read,
//!   update, delete, duplicate and search operations
//! - **Generation** produces learning objectives, modules, assessments,
//!   overviews and descriptions from a title, level, thematic and audience
//! - **Export** renders a course as JSON or as placeholder PDF, DOCX and SCORM
//!   text files served from an export directory
//! - **Lexicon** exposes levels, thematics, status codes, templates and
//!   placeholders as reference data
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`api`] - HTTP routes, handlers and error mapping
//! - [`core`] - Generation and export logic
//! - [`adapters`] - Course storage
//! - [`lexicon`] - Reference data
//! - [`domain`] - Course model, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prometheus::api::{self, AppState};
//! use prometheus::config::load_config_or_default;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("prometheus.toml")?;
//!     let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
//!     let state = AppState::from_config(config).await?;
//!
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!     api::serve(state, listener, shutdown_rx).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], backed by
//! [`domain::PrometheusError`]. The API layer turns those into
//! `{"detail": "..."}` responses with a matching status code.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod lexicon;
pub mod logging;
