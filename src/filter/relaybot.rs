//! Relaybot unwrapping.
//!
//! A relaybot bridges another chat network into IRC and prefixes each line
//! with the real author, e.g. `xmppbot: [Lisa] hello`. When the sender is a
//! registered relaybot and the body carries its delimiters, the message is
//! re-attributed:
//!
//! ```text
//! before: sender_nick = "xmppbot", server_alias = "", body = "[Lisa] hello"
//! after:  sender_nick = "Lisa", server_alias = "xmppbot", body = "hello"
//! ```
//!
//! The right delimiter is searched from the start of the body, not from the
//! end of the left delimiter. An occurrence overlapping the left delimiter
//! therefore wins and yields an empty nickname.

use tracing::debug;

use super::Registry;
use crate::bounded::{truncate, truncate_owned};
use crate::message::IncomingMessage;

/// Rewrite `msg` if it was relayed by a registered relaybot.
///
/// Returns whether a rewrite happened. On `false`, `msg` is untouched.
pub fn apply(msg: &mut IncomingMessage, registry: &Registry) -> bool {
    let Some(bot) = registry.find_relaybot(&msg.sender_nick) else {
        return false;
    };
    debug!(nick = %bot.bot_nick, "Relaybot found");

    let left = bot.left_delim.as_str();
    let right = bot.right_delim.as_str();

    if !msg.body.starts_with(left) {
        return false;
    }
    let Some(right_pos) = msg.body.find(right) else {
        return false;
    };

    let limits = registry.limits();
    let nick_start = left.len();
    let human = if right_pos > nick_start {
        truncate(&msg.body[nick_start..right_pos], limits.nick_len).to_string()
    } else {
        String::new()
    };
    let rest = truncate(&msg.body[right_pos + right.len()..], limits.msg_len).to_string();

    msg.server_alias = truncate_owned(std::mem::take(&mut msg.sender_nick), limits.server_len);
    msg.sender_nick = human;
    msg.body = rest;

    debug!(
        bot = %msg.server_alias,
        nick = %msg.sender_nick,
        "Unwrapped relayed message"
    );
    true
}
