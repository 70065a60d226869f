//! Built-in command verbs.
//!
//! Three letters each, matched case-insensitively on the air. Anything
//! between the verb and the following `:` is an options run, carried
//! uninterpreted.

/// Publish a value for a topic (client to broker).
pub const PUBLISH: &str = "pub";

/// Subscribe to a topic, possibly wildcarded (client to broker).
pub const SUBSCRIBE: &str = "sub";

/// Drop a subscription; empty topic drops all (client to broker).
pub const UNSUBSCRIBE: &str = "uns";

/// Liveness signal so the broker keeps subscriptions (client to broker).
pub const KEEP_ALIVE: &str = "kpa";

/// A topic value delivered to a subscriber (broker to client).
pub const TOPIC_VALUE: &str = "top";

/// Returns true if the verb is one this protocol defines.
pub fn is_builtin(cmd: &str) -> bool {
    matches!(cmd, PUBLISH | SUBSCRIBE | UNSUBSCRIBE | KEEP_ALIVE | TOPIC_VALUE)
}
