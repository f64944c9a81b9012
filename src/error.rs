//! Error types for the tree pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a tree rendering.
///
/// Per-entry failures during the walk are not represented here; the
/// collector drops those entries and carries on.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The root path does not exist.
    #[error("{}: No such file or directory", path.display())]
    RootNotFound { path: PathBuf },

    /// The root path exists but its metadata could not be read.
    #[error("{}: cannot access", path.display())]
    RootAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The root path is not a directory.
    #[error("{}: Not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Writing the rendered tree to the output sink failed.
    #[error("failed to write tree output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    /// Classify an I/O error raised while opening the root.
    pub fn root(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::RootNotFound { path },
            _ => Self::RootAccess { path, source },
        }
    }

    /// Whether this error came from validating the root path.
    pub fn is_root_access(&self) -> bool {
        !matches!(self, Self::Output(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_classified() {
        let err = TreeError::root(
            "/missing",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, TreeError::RootNotFound { .. }));
        assert!(err.is_root_access());
        assert!(err.to_string().contains("No such file"));
    }

    #[test]
    fn permission_denied_keeps_source() {
        let err = TreeError::root(
            "/locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, TreeError::RootAccess { .. }));
        assert_eq!(err.to_string(), "/locked: cannot access");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn os_message_appears_once_in_chain() {
        let err = TreeError::root(
            "/locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain, "/locked: cannot access: denied");
    }

    #[test]
    fn output_errors_are_not_root_errors() {
        let err = TreeError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert!(!err.is_root_access());
    }
}
