//! Unified error types for the elevator HAL.
//!
//! A single `Error` enum that every subsystem converts into. Out-of-range
//! floors and button indices handed to the channel map are caller defects
//! and panic instead; the variants here are the conditions a caller can
//! legitimately recover from or report.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The I/O transport could not be brought up.
    Init(InitError),
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
    /// A raw index from untrusted input does not name a hardware role.
    Range(RangeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Range(e) => write!(f, "range: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Initialisation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// The backend reported that the transport is unusable.
    TransportUnavailable,
    /// A backend has no room left to bind another line.
    CapacityExceeded { capacity: usize },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransportUnavailable => write!(f, "unable to initialize elevator hardware"),
            Self::CapacityExceeded { capacity } => {
                write!(f, "line table full ({} entries)", capacity)
            }
        }
    }
}

impl From<InitError> for Error {
    fn from(e: InitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Read(std::io::ErrorKind),
    /// The contents are not valid JSON for [`HalConfig`](crate::config::HalConfig).
    Parse { line: usize, column: usize },
    /// A value is outside its permitted range.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(kind) => write!(f, "read failed ({kind})"),
            Self::Parse { line, column } => {
                write!(f, "parse failed at line {line}, column {column}")
            }
            Self::ValidationFailed(msg) => write!(f, "invalid value: {msg}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Range errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    Floor(u8),
    Button(u8),
    Direction(i8),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Floor(v) => write!(f, "floor {v} out of range"),
            Self::Button(v) => write!(f, "button type {v} out of range"),
            Self::Direction(v) => write!(f, "motor direction {v} out of range"),
        }
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Self::Range(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, Error>;
