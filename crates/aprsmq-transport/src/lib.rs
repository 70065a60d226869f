//! Polled directory-queue transport.
//!
//! Frames travel between this process and the radio modem utility through
//! two directories, typically on a RAM disk: we drop one file per outgoing
//! frame into the transmit queue, and the modem bridge drops received
//! frames into the receive queue. A file is claimed by reading it fully
//! and then deleting it, so each side consumes an entry at most once.
//!
//! This is the lowest layer of aprsmq. Everything else builds on the
//! [`QueuePair`] type provided here.

pub mod error;
pub mod queue;

pub use error::{Result, TransportError};
pub use queue::{QueuePair, DEFAULT_RX_DIR, DEFAULT_TX_DIR};
