//! Incoming message filter.
//!
//! Every received chat line goes through [`process`] before display:
//! 1. [`should_ignore`]: lines from ignored nicknames are dropped.
//! 2. [`relaybot::apply`]: surviving lines relayed by a known bridge bot
//!    are re-attributed to the human author.

mod ignore;
pub mod registry;
pub mod relaybot;

pub use ignore::should_ignore;
pub use registry::{Registry, RelaybotDescriptor};

use crate::message::IncomingMessage;

/// Outcome of filtering one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Sender is ignored; do not display.
    Drop,
    /// Hand the message to the display layer.
    Deliver {
        /// Whether a relaybot rewrite was applied.
        rewritten: bool,
    },
}

/// Run the ignore check and, for survivors, the relaybot rewrite.
pub fn process(registry: &Registry, msg: &mut IncomingMessage) -> Verdict {
    if should_ignore(registry, msg) {
        return Verdict::Drop;
    }
    Verdict::Deliver {
        rewritten: relaybot::apply(msg, registry),
    }
}
