use std::path::PathBuf;

/// Errors that can occur in queue-directory operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A queue directory could not be created.
    #[error("failed to create queue directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An outbound queue file could not be written.
    #[error("failed to write queue file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The receive queue directory could not be listed.
    ///
    /// The queue directories are a required resource; losing one mid-run
    /// means the environment is broken, so callers treat this as fatal.
    #[error("failed to list receive queue {path}: {source}")]
    List {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TransportError>;
