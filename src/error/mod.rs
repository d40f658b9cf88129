//! Errors raised by buffer edits, range building and file loading
//!
//! Unrecognized color text is never an error: the normalizer answers `None`.

use crate::constants::errors;
use std::fmt;

/// How bad a failure is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The operation was refused; state is unchanged
    Error,
    /// An internal ordering guarantee was broken; the result was discarded
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        })
    }
}

/// Where the failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    Io,
    /// Cursor or deletion outside the text
    Buffer,
    /// Decoration ranges out of order
    Internal,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Io => "IO",
            Self::Buffer => "Buffer",
            Self::Internal => "Internal",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchError {
    pub severity: ErrorSeverity,
    pub kind: ErrorType,
    /// One of the codes in [`crate::constants::errors`]
    pub code: &'static str,
    pub message: String,
}

impl SwatchError {
    /// Refused operation
    pub fn new(kind: ErrorType, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code,
            message: message.into(),
        }
    }

    /// Broken invariant
    pub fn critical(kind: ErrorType, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            ..Self::new(kind, code, message)
        }
    }
}

impl fmt::Display for SwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for SwatchError {}

impl From<std::io::Error> for SwatchError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, errors::IO_ERROR, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SwatchError>;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
