use tracing::trace;

use crate::codec::{Message, ADDRESSEE_WIDTH};
use crate::error::{FrameError, Result};

/// A decoded transport line: an optional channel tag plus the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Channel tag as received, brackets included (e.g. `"[2]"`), for
    /// multi-port modems. `None` on the default channel.
    pub channel: Option<String>,
    /// The decoded frame.
    pub message: Message,
}

/// Decode one transport line.
///
/// Returns `Ok(None)` for lines that are deliberately ignored without a
/// diagnostic: empty input, and message-form frames whose command part
/// does not parse as exactly three letters followed by a `:`-terminated
/// options run (the permissive drop that lets unrelated APRS messages
/// share the channel). Structural problems come back as [`FrameError`]
/// so the caller can log them. Never panics, whatever the input bytes.
pub fn parse_packet(packet: &str) -> Result<Option<Packet>> {
    if packet.is_empty() {
        return Ok(None);
    }

    // There may be a leading "[n] " with a channel number.
    let (channel, rest) = split_channel_tag(packet);

    let Some((addrs, info)) = rest.split_once(':') else {
        return Err(FrameError::AddressSplit(packet.to_string()));
    };
    if addrs.is_empty() || info.is_empty() {
        return Err(FrameError::AddressSplit(packet.to_string()));
    }

    if let Some(inner) = info.strip_prefix('}') {
        // Third party traffic: unwrap one layer and start over,
        // preserving any channel tag.
        trace!(inner, "unwrapping third-party frame");
        return match &channel {
            Some(tag) => parse_packet(&format!("{tag} {inner}")),
            None => parse_packet(inner),
        };
    }

    if info.starts_with(':') {
        return parse_message(channel, addrs, info);
    }

    Err(FrameError::NotMessage(info.to_string()))
}

/// Parse the `:addressee9:cmdoptions:topic[=value]` information part.
/// The first character is already known to be `:`.
fn parse_message(channel: Option<String>, addrs: &str, info: &str) -> Result<Option<Packet>> {
    // The addressee sits between two colons, always exactly 9 characters.
    let head: Vec<(usize, char)> = info.char_indices().take(ADDRESSEE_WIDTH + 2).collect();
    if head.len() < ADDRESSEE_WIDTH + 2 || head[ADDRESSEE_WIDTH + 1].1 != ':' {
        return Err(FrameError::BadAddressee(info.to_string()));
    }
    let addressee = info[head[1].0..head[ADDRESSEE_WIDTH + 1].0].trim_end();
    let rest = &info[head[ADDRESSEE_WIDTH + 1].0 + 1..];

    // Three letters, case-insensitive, then anything up to the next ':'
    // is an options run we carry through uninterpreted.
    let Some(cmd) = rest.get(..3) else {
        return Ok(None);
    };
    if !cmd.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(None);
    }
    let Some(colon) = rest[3..].find(':') else {
        return Ok(None);
    };
    let options = &rest[3..3 + colon];
    let body = &rest[3 + colon + 1..];

    let (topic, value) = match body.find('=') {
        // A value with no topic is not a shape we deliver.
        Some(0) => return Ok(None),
        Some(eq) => (&body[..eq], &body[eq + 1..]),
        None => (body, ""),
    };

    let (source, destination, via) = split_address(addrs);
    Ok(Some(Packet {
        channel,
        message: Message {
            source,
            destination,
            via,
            addressee: addressee.to_string(),
            command: cmd.to_ascii_lowercase(),
            options: options.to_string(),
            topic: topic.to_string(),
            value: value.to_string(),
        },
    }))
}

fn split_channel_tag(packet: &str) -> (Option<String>, &str) {
    if packet.starts_with('[') {
        if let Some(end) = packet.find(']') {
            let tag = &packet[..=end];
            let rest = packet[end + 1..].trim_start_matches(' ');
            return (Some(tag.to_string()), rest);
        }
    }
    (None, packet)
}

/// Split `source>dest[,relay]` permissively; these fields are carried for
/// diagnostics and round-tripping, not validated.
fn split_address(addrs: &str) -> (String, String, String) {
    let (source, rest) = match addrs.split_once('>') {
        Some((s, r)) => (s, r),
        None => (addrs, ""),
    };
    let (destination, via) = match rest.split_once(',') {
        Some((d, v)) => (d, v),
        None => (rest, ""),
    };
    (
        source.to_string(),
        destination.to_string(),
        via.to_string(),
    )
}
