use aprsmq_frame::{command, Message, PRODUCT_ID};
use aprsmq_transport::QueuePair;
use tracing::{debug, warn};

use crate::config::StationConfig;

/// A pub/sub session with a broker station.
///
/// All verbs are fire-and-forget: no acknowledgement is awaited, and a
/// frame that cannot be queued is logged and lost, never surfaced to the
/// caller. The session also owns the keep-alive countdown; every frame
/// that reaches the transmit queue rewinds it.
#[derive(Debug)]
pub struct Session {
    pub(crate) config: StationConfig,
    pub(crate) queue: QueuePair,
    pub(crate) kpa_countdown: u32,
}

impl Session {
    /// Session over the queue directories named in the config.
    pub fn new(config: StationConfig) -> Self {
        let queue = QueuePair::new(&config.rx_dir, &config.tx_dir);
        let kpa_countdown = config.keep_alive_secs;
        Self {
            config,
            queue,
            kpa_countdown,
        }
    }

    /// The station settings this session was built from.
    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// Publish a value for a topic.
    pub fn publish(&mut self, topic: &str, value: &str) {
        self.send(command::PUBLISH, topic, value);
    }

    /// Subscribe to a topic.
    ///
    /// The topic may carry a wildcard; the syntax is the broker's
    /// business and is passed through untouched.
    pub fn subscribe(&mut self, topic: &str) {
        self.send(command::SUBSCRIBE, topic, "");
    }

    /// Drop a subscription. An empty topic asks the broker to drop every
    /// subscription this station holds.
    pub fn unsubscribe(&mut self, topic: &str) {
        self.send(command::UNSUBSCRIBE, topic, "");
    }

    /// Tell the broker this station is still alive.
    ///
    /// Sent automatically by the receive loop when the countdown runs
    /// out; calling it by hand is harmless.
    pub fn keep_alive(&mut self) {
        self.send(command::KEEP_ALIVE, "", "");
    }

    /// Rewind the keep-alive countdown to its full timeout.
    pub fn reset_keep_alive(&mut self) {
        self.kpa_countdown = self.config.keep_alive_secs;
    }

    fn send(&mut self, cmd: &str, topic: &str, value: &str) {
        let msg = Message::new(
            &self.config.mycall,
            PRODUCT_ID,
            &self.config.via,
            &self.config.broker,
            cmd,
            topic,
            value,
        );
        debug!(command = cmd, topic, "queueing frame");
        match self.queue.send(self.config.chan, &msg.encode()) {
            Ok(()) => self.reset_keep_alive(),
            // Fire and forget: the frame is lost, the session carries on.
            Err(error) => warn!(%error, command = cmd, "failed to queue frame"),
        }
    }
}
