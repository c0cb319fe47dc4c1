//! Incoming chat line as handed over by the protocol layer.

/// A received chat message on its way to the display layer.
///
/// The protocol layer owns this record. The filter only borrows it for the
/// duration of a single [`process`](crate::filter::process) call and may
/// rewrite it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Nickname as reported by the network.
    pub sender_nick: String,
    /// Original sender when the line was unwrapped from a relaybot, else empty.
    pub server_alias: String,
    /// Chat text.
    pub body: String,
}

impl IncomingMessage {
    /// Create a message with an empty server alias.
    pub fn new(sender_nick: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender_nick: sender_nick.into(),
            server_alias: String::new(),
            body: body.into(),
        }
    }

    /// Whether a relaybot rewrite has been applied.
    #[inline]
    pub fn is_relayed(&self) -> bool {
        !self.server_alias.is_empty()
    }
}
