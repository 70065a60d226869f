//! Publish/subscribe messaging over APRS packet radio.
//!
//! aprsmq rides pub/sub frames inside APRS "message" packets, exchanging
//! them with a radio modem utility through a pair of directory queues. A
//! remote broker station manages subscriptions and relays published
//! values to subscribers; a periodic keep-alive frame stops it from
//! expiring an idle subscription.
//!
//! # Crate Structure
//!
//! - [`frame`] — the addressed "message" frame codec
//! - [`transport`] — the polled directory-queue adapter
//! - [`session`] — pub/sub verbs, keep-alive, and the receive loop

/// Re-export frame types.
pub mod frame {
    pub use aprsmq_frame::*;
}

/// Re-export transport types.
pub mod transport {
    pub use aprsmq_transport::*;
}

/// Re-export session types.
pub mod session {
    pub use aprsmq_session::*;
}
