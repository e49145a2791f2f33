// src/logging.rs
//!
//! Tracing subscriber setup
//!
//! Diagnostics go to stderr without colours so stdout carries only the shell
//! protocol.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const DEFAULT_FILTER: &str = "warn";

/// Resolve the filter: explicit directive, then RUST_LOG, then `warn`
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter, AppError> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).map_err(|e| AppError::Logging {
            reason: format!("invalid filter '{}': {}", directive, e),
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

pub fn init(directive: Option<&str>) -> Result<(), AppError> {
    let filter = build_filter(directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging {
            reason: e.to_string(),
        })
}
