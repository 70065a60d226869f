//! Broker session management for radio pub/sub.
//!
//! This is the "just works" layer. Configure a station, then publish,
//! subscribe, and poll for deliveries; a periodic keep-alive frame goes
//! out on its own so the broker does not expire the subscription.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod session;

pub use config::{StationConfig, DEFAULT_KEEP_ALIVE_SECS};
pub use dispatch::{MessageHandler, POLL_INTERVAL};
pub use error::{Result, SessionError};
pub use session::Session;
