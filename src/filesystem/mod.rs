// src/filesystem/mod.rs
//!
//! Filesystem Module
//!
//! Operations behind the shell commands: listing, copy/move/remove, create,
//! recursive search and rwx permissions, plus the session directory they are
//! resolved against.

pub mod commands;
pub mod error;
pub mod search;
pub mod session;
pub mod types;


pub use commands::*;
pub use error::FsError;
pub use search::search;
pub use session::Session;
pub use types::*;
