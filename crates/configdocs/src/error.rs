//! Error types for configdocs.
//!
//! This module defines all error types used throughout the configdocs crate.
//! Two of them are fatal by contract: a filter that selects no setting
//! ([`Error::NoMatchingElement`]) and a path that does not exist and could not
//! be created ([`Error::FileNotFound`]).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configdocs operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Generation Errors ===
    /// No setting in the catalog passed the filter.
    #[error("no matching element: no setting satisfies filter [{filter}]")]
    NoMatchingElement {
        /// Human-readable summary of the filter that was applied.
        filter: String,
    },

    // === Path Errors ===
    /// A required file, or a component of a target path, does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// The settings catalog exists but could not be parsed.
    #[error("failed to parse settings catalog {}: {source}", path.display())]
    CatalogParse {
        /// Path to the catalog file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<figment::Error>,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for configdocs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a no-matching-element error for the given filter summary.
    #[must_use]
    pub fn no_matching_element(filter: impl Into<String>) -> Self {
        Self::NoMatchingElement {
            filter: filter.into(),
        }
    }

    /// Create a file-not-found error.
    #[must_use]
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error means the filter selected nothing.
    #[must_use]
    pub fn is_no_matching_element(&self) -> bool {
        matches!(self, Self::NoMatchingElement { .. })
    }

    /// Check if this error means a path was missing.
    #[must_use]
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matching_element_display() {
        let err = Error::no_matching_element("name == \"foo\"");
        let msg = err.to_string();
        assert!(msg.starts_with("no matching element"));
        assert!(msg.contains("name == \"foo\""));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = Error::file_not_found("/missing/settings.toml");
        assert_eq!(err.to_string(), "file not found: /missing/settings.toml");
    }

    #[test]
    fn test_is_no_matching_element() {
        assert!(Error::no_matching_element("true").is_no_matching_element());
        assert!(!Error::file_not_found("x").is_no_matching_element());
    }

    #[test]
    fn test_is_file_not_found() {
        assert!(Error::file_not_found("x").is_file_not_found());
        assert!(!Error::no_matching_element("true").is_file_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "catalog.path must not be empty".to_string(),
        };
        assert!(err.to_string().contains("catalog.path"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/root/forbidden"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_from_figment_error() {
        let err: Error = figment::Error::from("bad value".to_string()).into();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.to_string().contains("bad value"));
    }
}
