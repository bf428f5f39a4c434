//! Unified error hierarchy for TrainStat
//!
//! Package selection, import, export and configuration failures all funnel
//! into [`TrainStatError`], which carries a severity for logging.

use crate::models::ActivityKind;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all TrainStat operations
#[derive(Debug, Error)]
pub enum TrainStatError {
    /// Sensor package could not be turned into a training
    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    /// Package file could not be read
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Report could not be written
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration file missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors raised while selecting a training from a raw sensor package.
///
/// All of these are detected before any formula runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    /// Code is not one of SWM, RUN, WLK
    #[error("Unknown activity kind: {code}")]
    UnknownActivityKind { code: String },

    /// Wrong number of raw values for the activity kind
    #[error("{kind} expects {expected} values, got {actual}")]
    ArityMismatch {
        kind: ActivityKind,
        expected: usize,
        actual: usize,
    },
}

/// Package file import errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// File extension not recognised
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// Format-specific parsing error
    #[error("Parse error in {format} at {location}: {reason}")]
    ParseError {
        format: String,
        location: String,
        reason: String,
    },

    /// File could not be opened
    #[error("Cannot read {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

/// Report export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// Unknown report format name
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Output stream failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        ExportError::SerializationError(error.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(error: serde_json::Error) -> Self {
        ExportError::SerializationError(error.to_string())
    }
}

/// Result type alias for TrainStat operations
pub type Result<T> = std::result::Result<T, TrainStatError>;

impl TrainStatError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrainStatError::Package(err) => err.severity(),
            TrainStatError::Import(ImportError::Unreadable { .. }) => ErrorSeverity::Error,
            TrainStatError::Import(_) => ErrorSeverity::Warning,
            TrainStatError::Export(_) => ErrorSeverity::Error,
            TrainStatError::Configuration(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrainStatError::Package(err) => err.user_message(),
            TrainStatError::Import(ImportError::Unreadable { path, .. }) => {
                format!("Could not read package file: {}", path.display())
            }
            TrainStatError::Configuration(reason) => {
                format!("Configuration is invalid: {}. Run `trainstat config --init` to reset it.", reason)
            }
            _ => self.to_string(),
        }
    }
}

impl PackageError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PackageError::UnknownActivityKind { .. } => ErrorSeverity::Warning,
            PackageError::ArityMismatch { .. } => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            PackageError::UnknownActivityKind { code } => format!(
                "Unknown workout code '{}'. Expected one of: {}",
                code,
                ActivityKind::ALL
                    .iter()
                    .map(|kind| kind.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            PackageError::ArityMismatch { kind, expected, actual } => format!(
                "{} packages need {} values ({}), but {} were given",
                kind.code(),
                expected,
                kind.field_names().join(", "),
                actual
            ),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical error, nothing can be processed
    Critical,
    /// Error that prevents the current entry from being processed
    Error,
    /// Warning that doesn't prevent other entries
    Warning,
}

/// Log an error at the level its severity calls for
pub fn log_error(severity: ErrorSeverity, error: &dyn std::error::Error) {
    match severity {
        ErrorSeverity::Critical | ErrorSeverity::Error => tracing::error!(%error, "operation failed"),
        ErrorSeverity::Warning => tracing::warn!(%error, "operation failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = TrainStatError::from(PackageError::UnknownActivityKind {
            code: "XYZ".to_string(),
        });
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = TrainStatError::Configuration("bad".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_message().contains("config --init"));
    }

    #[test]
    fn test_user_messages() {
        let err = PackageError::ArityMismatch {
            kind: ActivityKind::Running,
            expected: 3,
            actual: 4,
        };
        let message = err.user_message();
        assert!(message.contains("RUN packages need 3 values"));
        assert!(message.contains("action, duration, weight"));

        let err = PackageError::UnknownActivityKind {
            code: "XYZ".to_string(),
        };
        assert!(err.user_message().contains("SWM, RUN, WLK"));
    }

    #[test]
    fn test_display_messages() {
        let err = PackageError::ArityMismatch {
            kind: ActivityKind::SportsWalking,
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.to_string(), "SportsWalking expects 4 values, got 2");
    }
}
