//! Ignore list and relaybot list.
//!
//! Keys are nicknames compared exactly (no case folding) after truncation
//! to `nick_len`, so two nicknames agreeing on their first `nick_len` bytes
//! address the same entry. Both lists keep insertion order.

use tracing::{debug, warn};

use crate::bounded::truncate;
use crate::config::{FilterConfig, LimitsConfig};
use crate::error::{RegistryError, RegistryResult};

/// A relaybot: a bridge account that wraps the human sender's nickname
/// between two delimiters at the start of each relayed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaybotDescriptor {
    pub bot_nick: String,
    pub left_delim: String,
    pub right_delim: String,
}

/// In-memory ignore and relaybot lists for one client session.
///
/// The registry defines no locking; callers serialize access.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    limits: LimitsConfig,
    ignore: Vec<String>,
    relaybots: Vec<RelaybotDescriptor>,
}

impl Registry {
    /// Create an empty registry with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with custom bounds.
    pub fn with_limits(limits: LimitsConfig) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Apply startup seed lists. Duplicates are logged and skipped.
    pub fn seed(&mut self, config: &FilterConfig) {
        for nick in &config.ignore {
            if let Err(e) = self.add_ignore(nick) {
                warn!(nick = %nick, code = e.error_code(), error = %e, "Skipping ignore seed");
            }
        }
        for bot in &config.relaybot {
            if let Err(e) = self.add_relaybot(&bot.nick, &bot.left, &bot.right) {
                warn!(
                    nick = %bot.nick,
                    code = e.error_code(),
                    error = %e,
                    "Skipping relaybot seed"
                );
            }
        }
    }

    #[inline]
    fn key<'a>(&self, nick: &'a str) -> &'a str {
        truncate(nick, self.limits.nick_len)
    }

    // ------------------------------------------------------------------------
    // Ignore list
    // ------------------------------------------------------------------------

    /// Add `nick` to the ignore list.
    pub fn add_ignore(&mut self, nick: &str) -> RegistryResult {
        let key = self.key(nick);
        if self.ignore.iter().any(|n| n == key) {
            return Err(RegistryError::AlreadyExists(key.to_string()));
        }
        self.ignore.push(key.to_string());
        debug!(nick = %key, "Added to ignore list");
        Ok(())
    }

    /// Remove `nick` from the ignore list.
    pub fn remove_ignore(&mut self, nick: &str) -> RegistryResult {
        let key = self.key(nick);
        let Some(idx) = self.ignore.iter().position(|n| n == key) else {
            return Err(RegistryError::NotFound(key.to_string()));
        };
        self.ignore.remove(idx);
        debug!(nick = %key, "Removed from ignore list");
        Ok(())
    }

    /// Whether `nick` is on the ignore list.
    pub fn is_ignored(&self, nick: &str) -> bool {
        let key = self.key(nick);
        self.ignore.iter().any(|n| n == key)
    }

    /// Ignored nicknames in insertion order.
    pub fn ignored(&self) -> impl Iterator<Item = &str> {
        self.ignore.iter().map(String::as_str)
    }

    // ------------------------------------------------------------------------
    // Relaybot list
    // ------------------------------------------------------------------------

    /// Register a relaybot. Delimiters longer than `delim_len` are truncated.
    pub fn add_relaybot(
        &mut self,
        nick: &str,
        left_delim: &str,
        right_delim: &str,
    ) -> RegistryResult {
        let key = self.key(nick);
        if self.relaybots.iter().any(|b| b.bot_nick == key) {
            return Err(RegistryError::AlreadyExists(key.to_string()));
        }
        let descriptor = RelaybotDescriptor {
            bot_nick: key.to_string(),
            left_delim: truncate(left_delim, self.limits.delim_len).to_string(),
            right_delim: truncate(right_delim, self.limits.delim_len).to_string(),
        };
        debug!(
            nick = %descriptor.bot_nick,
            left = ?descriptor.left_delim,
            right = ?descriptor.right_delim,
            "Added relaybot"
        );
        self.relaybots.push(descriptor);
        Ok(())
    }

    /// Unregister a relaybot.
    pub fn remove_relaybot(&mut self, nick: &str) -> RegistryResult {
        let key = self.key(nick);
        let Some(idx) = self.relaybots.iter().position(|b| b.bot_nick == key) else {
            return Err(RegistryError::NotFound(key.to_string()));
        };
        self.relaybots.remove(idx);
        debug!(nick = %key, "Removed relaybot");
        Ok(())
    }

    /// Look up the relaybot registered under `nick`.
    pub fn find_relaybot(&self, nick: &str) -> Option<&RelaybotDescriptor> {
        let key = self.key(nick);
        self.relaybots.iter().find(|b| b.bot_nick == key)
    }

    /// Registered relaybots in insertion order.
    pub fn relaybots(&self) -> impl Iterator<Item = &RelaybotDescriptor> {
        self.relaybots.iter()
    }
}
