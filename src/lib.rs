pub mod config;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod permissions;
pub mod shell;

use std::io;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::filesystem::Session;
use crate::shell::Shell;

pub fn run() -> Result<(), AppError> {
    let config = Config::from_args();
    logging::init(config.log_level.as_deref())?;

    let session = match &config.start_dir {
        Some(dir) => Session::new(dir).map_err(|source| AppError::StartDir {
            path: dir.display().to_string(),
            source,
        })?,
        None => Session::from_process_cwd().map_err(|source| AppError::StartDir {
            path: ".".to_string(),
            source,
        })?,
    };

    info!(start = %session.current_dir().display(), "session started");

    let stdin = io::stdin();
    let mut shell = Shell::new(session, stdin.lock(), io::stdout(), io::stderr());
    shell.run(!config.quiet)?;

    Ok(())
}
