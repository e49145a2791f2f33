// src/config.rs
//!
//! Startup configuration
//!
//! Command line flags with environment variable fallbacks. There is no
//! configuration file.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "file-explorer",
    version,
    about = "Interactive shell for browsing and manipulating the local filesystem"
)]
pub struct Config {
    /// Directory the session starts in (defaults to the working directory)
    #[arg(long, env = "FILE_EXPLORER_START_DIR", value_name = "DIR")]
    pub start_dir: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `file_explorer_lib=trace`.
    /// Falls back to RUST_LOG, then `warn`.
    #[arg(long, env = "FILE_EXPLORER_LOG", value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Skip the banner and command reference at startup
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    pub fn from_args() -> Self {
        Self::parse()
    }
}
