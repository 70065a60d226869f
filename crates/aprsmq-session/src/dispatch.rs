use std::thread;
use std::time::Duration;

use aprsmq_frame::{command, parse_packet, Packet};
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::session::Session;

/// Interval between receive-queue polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Receives decoded topic values addressed to this station.
///
/// Implemented for any `FnMut` closure with the same five arguments.
/// The full tuple is passed through so applications can re-check the
/// addressee against their own callsign before acting.
pub trait MessageHandler {
    /// Called once per delivered frame.
    fn on_message(&mut self, addressee: &str, command: &str, options: &str, topic: &str, value: &str);
}

impl<F> MessageHandler for F
where
    F: FnMut(&str, &str, &str, &str, &str),
{
    fn on_message(&mut self, addressee: &str, command: &str, options: &str, topic: &str, value: &str) {
        self(addressee, command, options, topic, value)
    }
}

impl Session {
    /// Drain the receive queue once and run one keep-alive tick.
    ///
    /// Every waiting file is claimed and its lines decoded. Frames for
    /// other stations or with commands other than the topic-value verb
    /// are logged and dropped, as are lines that fail to decode. The
    /// only error out of here is the fatal listing failure.
    pub fn poll_once(&mut self, handler: &mut impl MessageHandler) -> Result<()> {
        for line in self.queue.drain()? {
            trace!(line = line.as_str(), "received");
            match parse_packet(&line) {
                Ok(Some(packet)) => self.deliver(packet, handler),
                Ok(None) => {}
                Err(error) => debug!(%error, "dropping undecodable line"),
            }
        }
        self.tick_keep_alive();
        Ok(())
    }

    /// Poll the receive queue forever, one drain per second.
    ///
    /// Returns only when listing the receive queue fails; there is no
    /// other way out of the loop.
    pub fn run(&mut self, mut handler: impl MessageHandler) -> Result<()> {
        self.queue.ensure_dirs()?;
        info!(
            rx = %self.config.rx_dir.display(),
            tx = %self.config.tx_dir.display(),
            "entering receive loop"
        );
        loop {
            thread::sleep(POLL_INTERVAL);
            self.poll_once(&mut handler)?;
        }
    }

    fn deliver(&self, packet: Packet, handler: &mut impl MessageHandler) {
        let msg = packet.message;
        if msg.command != command::TOPIC_VALUE {
            if command::is_builtin(&msg.command) {
                debug!(command = msg.command.as_str(), "ignoring non topic-value command");
            } else {
                debug!(command = msg.command.as_str(), "ignoring unknown command");
            }
            return;
        }
        if msg.addressee != self.config.mycall {
            debug!(
                addressee = msg.addressee.as_str(),
                "ignoring frame for another station"
            );
            return;
        }
        handler.on_message(&msg.addressee, &msg.command, &msg.options, &msg.topic, &msg.value);
    }

    fn tick_keep_alive(&mut self) {
        self.kpa_countdown = self.kpa_countdown.saturating_sub(1);
        if self.kpa_countdown == 0 {
            debug!("keep-alive countdown expired");
            // Queueing the frame rewinds the countdown; if it could not
            // be queued, the next tick tries again.
            self.keep_alive();
        }
    }
}
