// src/permissions/codec.rs
//!
//! rwx permission bit set
//!
//! Holds the nine owner/group/other read/write/execute flags as a mask and
//! converts them to the `"rwx r-x r-x"` display form and the `"755"` octal form.

use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    #[error("expected a 3-digit octal like 755, got '{value}'")]
    InvalidFormat { value: String },
}

// ============================================================================
// Types
// ============================================================================

/// Principal a group of three bits belongs to, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Owner,
    Group,
    Other,
}

impl Principal {
    pub const ALL: [Principal; 3] = [Principal::Owner, Principal::Group, Principal::Other];

    fn shift(self) -> u16 {
        match self {
            Principal::Owner => 6,
            Principal::Group => 3,
            Principal::Other => 0,
        }
    }
}

pub const READ: u16 = 0b100;
pub const WRITE: u16 = 0b010;
pub const EXECUTE: u16 = 0b001;

/// Nine rwx flags stored in the low bits of a `u16`, laid out like a unix mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Permissions(u16);

impl Permissions {
    pub const MASK: u16 = 0o777;
    pub const NONE: Permissions = Permissions(0);
    pub const ALL: Permissions = Permissions(Self::MASK);

    /// Build from a raw mode, discarding everything above the rwx bits
    /// (file type, setuid/setgid, sticky).
    pub fn from_mode(mode: u32) -> Self {
        Permissions((mode & Self::MASK as u32) as u16)
    }

    pub fn mode(self) -> u32 {
        self.0 as u32
    }

    /// The three rwx bits of one principal, as a value in `0..=7`.
    pub fn triad(self, principal: Principal) -> u16 {
        (self.0 >> principal.shift()) & 0b111
    }

    pub fn with_triad(self, principal: Principal, bits: u16) -> Self {
        let shift = principal.shift();
        let cleared = self.0 & !(0b111 << shift);
        Permissions(cleared | ((bits & 0b111) << shift))
    }

    pub fn has(self, principal: Principal, bit: u16) -> bool {
        self.triad(principal) & bit != 0
    }

    /// `"rwx rwx rwx"` form, `-` for unset bits.
    pub fn to_display_string(self) -> String {
        let mut out = String::with_capacity(11);
        for (i, principal) in Principal::ALL.into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if self.has(principal, READ) { 'r' } else { '-' });
            out.push(if self.has(principal, WRITE) { 'w' } else { '-' });
            out.push(if self.has(principal, EXECUTE) { 'x' } else { '-' });
        }
        out
    }

    /// Three octal digits, owner first.
    pub fn to_octal(self) -> String {
        Principal::ALL
            .into_iter()
            .map(|p| char::from(b'0' + self.triad(p) as u8))
            .collect()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl std::str::FromStr for Permissions {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_octal(s)
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Display form of a permission set.
pub fn encode(permissions: Permissions) -> String {
    permissions.to_display_string()
}

/// Parse a 3-digit octal string such as `"644"`.
///
/// Digits are validated before anything is assembled, so a bad digit in the
/// last position never yields a partially decoded value.
pub fn decode_octal(text: &str) -> Result<Permissions, PermissionError> {
    let invalid = || PermissionError::InvalidFormat {
        value: text.to_string(),
    };

    let bytes = text.as_bytes();
    if bytes.len() != 3 {
        return Err(invalid());
    }

    let mut digits = [0u16; 3];
    for (slot, byte) in digits.iter_mut().zip(bytes) {
        match *byte {
            b @ b'0'..=b'7' => *slot = (b - b'0') as u16,
            _ => return Err(invalid()),
        }
    }

    Ok(Principal::ALL
        .into_iter()
        .zip(digits)
        .fold(Permissions::NONE, |acc, (principal, bits)| {
            acc.with_triad(principal, bits)
        }))
}
