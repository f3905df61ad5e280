//! Error types for scaffold generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while deriving names, resolving stubs, or writing artifacts
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The model identifier is empty or cannot produce a class name
    #[error("invalid model name '{identifier}': {reason}")]
    InvalidIdentifier {
        /// Identifier as supplied by the caller
        identifier: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// No resolver in the chain could supply the stub
    #[error("stub not found: {name} (searched: {searched})")]
    TemplateNotFound {
        /// Logical stub name, e.g. `controllers/api_controller.stub`
        name: String,
        /// Human-readable list of the locations that were checked
        searched: String,
    },

    /// Directory creation, read or write failure
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The routing file is absent; route registration was skipped
    #[error("routing file not found: {}", path.display())]
    RoutingFileMissing {
        /// Routing file that was expected
        path: PathBuf,
    },

    /// Configuration could not be loaded or extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it concerns
    #[must_use]
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is reported as a warning rather than a failure
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self, Self::RoutingFileMissing { .. })
    }
}

impl From<figment::Error> for ScaffoldError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

/// Result alias used across the library
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_file_missing_is_soft() {
        let err = ScaffoldError::RoutingFileMissing {
            path: PathBuf::from("routes/api.php"),
        };
        assert!(err.is_soft());
        assert_eq!(err.to_string(), "routing file not found: routes/api.php");
    }

    #[test]
    fn test_hard_errors() {
        let err = ScaffoldError::TemplateNotFound {
            name: "models/model.stub".to_string(),
            searched: "bundled".to_string(),
        };
        assert!(!err.is_soft());
        assert!(err.to_string().contains("models/model.stub"));

        let err = ScaffoldError::filesystem(
            "app/Models",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_soft());
        assert!(err.to_string().starts_with("filesystem error at app/Models"));
    }
}
