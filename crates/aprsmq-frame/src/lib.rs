//! Addressed APRS "message" framing for radio pub/sub.
//!
//! This is the wire layer of aprsmq. Every frame is a single text line
//! carried in the message field of an APRS packet:
//!
//! ```text
//! source>dest[,relay]::addressee9:cmd:topic[=value]
//! ```
//!
//! The addressee field is always exactly 9 characters between its two
//! colons, space-padded. Commands are three letters, case-insensitive on
//! the air. A bare topic with no `=` means a topic with no value.

pub mod codec;
pub mod command;
pub mod error;
pub mod parser;

pub use codec::{Message, ADDRESSEE_WIDTH, PRODUCT_ID};
pub use command::{KEEP_ALIVE, PUBLISH, SUBSCRIBE, TOPIC_VALUE, UNSUBSCRIBE};
pub use error::{FrameError, Result};
pub use parser::{parse_packet, Packet};
