//! Fatal error taxonomy. These abort translation outright; everything
//! recoverable lives in [`crate::diagnostics`] instead.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::pyast::OracleError;

/// Reasons `parse_file` can fail to produce a `TranslationUnit` at all.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// `ScopeManager::leave` observed a scope owner that did not match
    /// the top of the stack. Indicates a bug in a translator that
    /// entered a scope it never left, or left one out of order.
    #[error("scope imbalance: expected to leave {expected}, found {found}")]
    ScopeImbalance { expected: String, found: String },

    /// The Python parser oracle rejected the source.
    #[error("parser failure: {0}")]
    OracleFailure(#[from] OracleError),

    /// Reading the source file failed before translation could start.
    #[error("I/O failure reading source: {0}")]
    Io(#[from] io::Error),
}

/// The outward-facing wrapper `parse_file` actually returns, pairing
/// the fatal cause with the file that triggered it.
#[derive(Debug)]
pub struct TranslationFailed {
    pub file: String,
    pub cause: TranslationError,
}

impl fmt::Display for TranslationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translation of {} failed: {}", self.file, self.cause)
    }
}

impl std::error::Error for TranslationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

impl TranslationFailed {
    pub fn new(file: impl Into<String>, cause: TranslationError) -> Self {
        Self {
            file: file.into(),
            cause,
        }
    }
}

pub type TranslationResult<T> = Result<T, TranslationFailed>;
