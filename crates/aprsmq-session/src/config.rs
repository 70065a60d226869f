use std::path::{Path, PathBuf};

use aprsmq_transport::{DEFAULT_RX_DIR, DEFAULT_TX_DIR};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// Seconds of send silence before a keep-alive frame goes out.
pub const DEFAULT_KEEP_ALIVE_SECS: u32 = 30 * 60;

/// Per-deployment station settings.
///
/// Fixed for the life of the process; there is no runtime
/// reconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationConfig {
    /// This station's callsign with optional SSID (e.g. `WB2OSZ-1`).
    pub mycall: String,
    /// The broker station managing subscriptions (e.g. `WB2OSZ-15`).
    pub broker: String,
    /// Relay path for outgoing frames, comma-separated, may be empty.
    #[serde(default)]
    pub via: String,
    /// Radio channel for a multi-port modem; channel 0 carries no tag.
    #[serde(default)]
    pub chan: u8,
    /// Seconds of send silence before a keep-alive frame.
    #[serde(default = "default_keep_alive")]
    pub keep_alive_secs: u32,
    /// Receive queue directory, filled by the modem bridge.
    #[serde(default = "default_rx_dir")]
    pub rx_dir: PathBuf,
    /// Transmit queue directory, drained by the modem bridge.
    #[serde(default = "default_tx_dir")]
    pub tx_dir: PathBuf,
}

fn default_keep_alive() -> u32 {
    DEFAULT_KEEP_ALIVE_SECS
}

fn default_rx_dir() -> PathBuf {
    PathBuf::from(DEFAULT_RX_DIR)
}

fn default_tx_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TX_DIR)
}

impl StationConfig {
    /// Config with defaults for everything but the two station ids.
    pub fn new(mycall: impl Into<String>, broker: impl Into<String>) -> Self {
        Self {
            mycall: mycall.into(),
            broker: broker.into(),
            via: String::new(),
            chan: 0,
            keep_alive_secs: DEFAULT_KEEP_ALIVE_SECS,
            rx_dir: default_rx_dir(),
            tx_dir: default_tx_dir(),
        }
    }

    /// Load settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SessionError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SessionError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
