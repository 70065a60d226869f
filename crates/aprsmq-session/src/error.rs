use std::path::PathBuf;

/// Errors surfaced by the session layer.
///
/// The pub/sub verbs never return errors — a frame that cannot be queued
/// is logged and lost — so this covers configuration loading and the one
/// fatal failure of the receive loop.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Queue transport failure; fatal when raised from the receive loop.
    #[error("transport error: {0}")]
    Transport(#[from] aprsmq_transport::TransportError),

    /// A configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration file did not parse.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SessionError>;
