//! Error types for Breadcrumbs

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for breadcrumb operations
#[derive(Error, Debug)]
pub enum BreadcrumbError {
    /// The daily log could not be opened, created or written
    #[error("Failed to append to {}: {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory holding the tool could not be determined
    #[error("Cannot locate tool directory: {0}")]
    ToolLocation(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BreadcrumbError {
    pub(crate) fn append(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Append {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using BreadcrumbError
pub type BreadcrumbResult<T> = Result<T, BreadcrumbError>;
