// src/permissions/mod.rs
//!
//! Permission Module
//!
//! Platform-independent rwx permission set with display and octal codecs.
//! Mapping to the native permission call happens in `filesystem::commands`.

pub mod codec;

#[cfg(test)]
mod tests;

pub use codec::*;
