use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a validation run.
///
/// Check failures are never reported through this type; they are recorded
/// on the [`ValidationRun`](crate::models::ValidationRun) instead.
#[derive(Error, Debug)]
pub enum SitecheckError {
    /// A directory could not be listed.
    #[error("cannot list directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The project root could not be derived from the executable location.
    #[error("cannot determine project root from executable {}", exe.display())]
    ProjectRoot { exe: PathBuf },

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, SitecheckError>`.
pub type Result<T> = std::result::Result<T, SitecheckError>;
