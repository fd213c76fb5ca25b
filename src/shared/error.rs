use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - comparison completed (and no differences, when gating on them)
    Success = 0,
    /// Differences were detected and `--fail-on-difference` was requested
    DifferencesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing inventory, integrity failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DifferencesDetected => write!(f, "Differences Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the comparison engine and its adapters.
///
/// The first four variants are the engine's own taxonomy and are terminal:
/// nothing retries them and no partial result is produced. The remaining
/// variants come from the filesystem adapters.
#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("Inventory not found: {inventory_id}\n\n💡 Hint: Check the identifier and that the SBOM for this application has been generated")]
    NotFound { inventory_id: String },

    #[error("Invalid comparison input: {reason}\n\n💡 Hint: {hint}")]
    InvalidInput { reason: String, hint: String },

    #[error("Unsupported export format: {format}\n\n💡 Hint: Please specify 'json', 'csv' or 'report'")]
    UnsupportedFormat { format: String },

    #[error("Data integrity violation in inventory {inventory_id}\nDetails: {details}\n\n💡 Hint: Regenerate the SBOM for this application")]
    DataIntegrity {
        inventory_id: String,
        details: String,
    },

    #[error("Comparison not found: {comparison_id}\n\n💡 Hint: Run 'sbom-compare history' to list stored comparisons")]
    ComparisonNotFound { comparison_id: String },

    #[error("Comparison {comparison_id} is already recorded\n\n💡 Hint: Stored comparisons are immutable; run the comparison again to create a new entry")]
    HistoryConflict { comparison_id: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl ComparisonError {
    /// Shorthand for an [`ComparisonError::InvalidInput`] with a hint.
    pub fn invalid_input(reason: impl Into<String>, hint: impl Into<String>) -> Self {
        ComparisonError::InvalidInput {
            reason: reason.into(),
            hint: hint.into(),
        }
    }

    /// Shorthand for a [`ComparisonError::DataIntegrity`] failure.
    pub fn data_integrity(inventory_id: impl Into<String>, details: impl Into<String>) -> Self {
        ComparisonError::DataIntegrity {
            inventory_id: inventory_id.into(),
            details: details.into(),
        }
    }
}
