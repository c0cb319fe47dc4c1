//! Ignore filter.

use tracing::trace;

use super::Registry;
use crate::message::IncomingMessage;

/// Whether `msg` comes from an ignored nickname.
///
/// Callers must stop processing (relaybot rewrite included) when this
/// returns true.
pub fn should_ignore(registry: &Registry, msg: &IncomingMessage) -> bool {
    let ignored = registry.is_ignored(&msg.sender_nick);
    if ignored {
        trace!(nick = %msg.sender_nick, "Dropping message from ignored nick");
    }
    ignored
}
