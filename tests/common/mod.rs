//! Shared helpers for integration tests.

#![allow(dead_code)]

use slirc_filter::{IncomingMessage, Registry, Verdict, process};

/// Registry with one bridge bot and one ignored nick, as commonly configured.
pub fn bridged_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .add_relaybot("xmppbot", "[", "] ")
        .expect("fresh registry accepts relaybot");
    registry
        .add_ignore("spammer")
        .expect("fresh registry accepts ignore");
    registry
}

/// Run a batch of `(nick, body)` lines through the filter, returning what
/// would be displayed.
pub fn display(registry: &Registry, lines: &[(&str, &str)]) -> Vec<IncomingMessage> {
    lines
        .iter()
        .filter_map(|(nick, body)| {
            let mut msg = IncomingMessage::new(*nick, *body);
            match process(registry, &mut msg) {
                Verdict::Drop => None,
                Verdict::Deliver { .. } => Some(msg),
            }
        })
        .collect()
}
