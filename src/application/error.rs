use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger file not found: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("Malformed ledger row at line {line}: invalid {field} ({reason})")]
    Parse {
        line: u64,
        field: &'static str,
        reason: String,
    },

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LedgerError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn parse(line: u64, field: &'static str, reason: impl Into<String>) -> Self {
        LedgerError::Parse {
            line,
            field,
            reason: reason.into(),
        }
    }

    /// Bad user input; the caller should ask again.
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation { .. })
    }
}
