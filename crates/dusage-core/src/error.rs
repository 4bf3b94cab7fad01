//! Error types for sizing and metadata acquisition.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the pure sizing helpers.
#[derive(Debug, Error)]
pub enum SizeError {
    /// Magnitude cannot be rendered as a digit count.
    #[error("Invalid magnitude: {value}")]
    InvalidMagnitude { value: f64 },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Errors that can occur while reading entry metadata.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_io() {
        let err = ScanError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ScanError::PermissionDenied { .. }));
    }

    #[test]
    fn test_scan_error_other_kind() {
        let err = ScanError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "bad"),
        );
        assert!(matches!(err, ScanError::Io { .. }));
        assert!(err.to_string().contains("/test/path"));
    }

    #[test]
    fn test_invalid_magnitude_message() {
        let err = SizeError::InvalidMagnitude { value: -1.5 };
        assert_eq!(err.to_string(), "Invalid magnitude: -1.5");
    }
}
