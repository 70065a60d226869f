/// Width of the addressee field between its two colons.
pub const ADDRESSEE_WIDTH: usize = 9;

/// Product identifier carried in the AX.25 destination field.
///
/// APRS convention uses the destination for a product id rather than for
/// routing; every participant in this protocol sends to the same one.
pub const PRODUCT_ID: &str = "APMQ01";

/// A single pub/sub frame nested inside an APRS "message".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Originating station, `CALL` or `CALL-SSID`.
    pub source: String,
    /// The AX.25 destination field, normally [`PRODUCT_ID`].
    pub destination: String,
    /// Comma-separated relay path, empty when there is none.
    pub via: String,
    /// Station the frame is logically directed to, stored trimmed.
    pub addressee: String,
    /// Three-letter verb, lowercase.
    pub command: String,
    /// Raw text between the command and the next `:`, uninterpreted.
    pub options: String,
    /// Topic name; empty for frames that carry none.
    pub topic: String,
    /// Topic value; empty when the frame has no `=` suffix.
    pub value: String,
}

impl Message {
    /// Build a frame with an empty options run.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        via: impl Into<String>,
        addressee: impl Into<String>,
        command: impl Into<String>,
        topic: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            via: via.into(),
            addressee: addressee.into(),
            command: command.into(),
            options: String::new(),
            topic: topic.into(),
            value: value.into(),
        }
    }

    /// Serialize to the single-line wire form.
    ///
    /// The addressee is space-padded, or truncated, to exactly
    /// [`ADDRESSEE_WIDTH`] characters. The `=value` suffix is omitted
    /// entirely when the value is empty, and `,relay` when the relay path
    /// is empty. Topic and value must not contain `:`, `=`, or `,`;
    /// nothing here escapes them.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(64);
        out.push_str(&self.source);
        out.push('>');
        out.push_str(&self.destination);
        if !self.via.is_empty() {
            out.push(',');
            out.push_str(&self.via);
        }
        out.push_str("::");
        out.push_str(&pad_addressee(&self.addressee));
        out.push(':');
        out.push_str(&self.command);
        out.push_str(&self.options);
        out.push(':');
        out.push_str(&self.topic);
        if !self.value.is_empty() {
            out.push('=');
            out.push_str(&self.value);
        }
        out
    }
}

fn pad_addressee(addr: &str) -> String {
    let mut to: String = addr.chars().take(ADDRESSEE_WIDTH).collect();
    for _ in to.chars().count()..ADDRESSEE_WIDTH {
        to.push(' ');
    }
    to
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_publish_with_value() {
        let msg = Message::new("WB2OSZ", PRODUCT_ID, "", "N2GH", "pub", "button1", "1");
        assert_eq!(msg.encode(), "WB2OSZ>APMQ01::N2GH     :pub:button1=1");
    }

    #[test]
    fn encode_subscribe_with_relay_path() {
        let msg = Message::new(
            "WB2OSZ",
            PRODUCT_ID,
            "WIDE1-1",
            "WN2OSZ-15",
            "sub",
            "led",
            "",
        );
        assert_eq!(msg.encode(), "WB2OSZ>APMQ01,WIDE1-1::WN2OSZ-15:sub:led");
    }

    #[test]
    fn encode_multi_hop_relay_path() {
        let msg = Message::new(
            "WB2OSZ",
            PRODUCT_ID,
            "WIDE1-1,WIDE2-1",
            "WN2OSZ-1",
            "uns",
            "",
            "",
        );
        assert_eq!(msg.encode(), "WB2OSZ>APMQ01,WIDE1-1,WIDE2-1::WN2OSZ-1 :uns:");
    }

    #[test]
    fn encode_keep_alive_has_bare_trailing_colon() {
        let msg = Message::new("WB2OSZ-1", PRODUCT_ID, "", "WB2OSZ-15", "kpa", "", "");
        assert_eq!(msg.encode(), "WB2OSZ-1>APMQ01::WB2OSZ-15:kpa:");
    }

    #[test]
    fn addressee_truncated_to_field_width() {
        let msg = Message::new("A", "B", "", "VERYLONGCALLSIGN", "pub", "t", "v");
        assert_eq!(msg.encode(), "A>B::VERYLONGC:pub:t=v");
    }

    #[test]
    fn value_may_itself_contain_equals() {
        let msg = Message::new("A", "B", "", "C", "pub", "led", "(255,255,0)");
        assert_eq!(msg.encode(), "A>B::C        :pub:led=(255,255,0)");
    }

    #[test]
    fn options_are_emitted_between_command_and_colon() {
        let mut msg = Message::new("A", "B", "", "C", "pub", "t", "v");
        msg.options = "-x".to_string();
        assert_eq!(msg.encode(), "A>B::C        :pub-x:t=v");
    }
}
