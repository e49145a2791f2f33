// src/error.rs

use thiserror::Error;

use crate::filesystem::FsError;

/// Failures that stop the program before or outside the command loop
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot start in '{path}': {source}")]
    StartDir {
        path: String,
        #[source]
        source: FsError,
    },

    #[error("Logging setup failed: {reason}")]
    Logging { reason: String },

    #[error("Terminal I/O failed: {source}")]
    Terminal {
        #[from]
        source: std::io::Error,
    },
}
