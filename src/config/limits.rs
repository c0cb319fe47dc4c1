//! Field length bounds configuration.

use serde::Deserialize;

/// Default maximum nickname length in bytes.
pub const DEFAULT_NICK_LEN: usize = 128;
/// Default maximum server alias length in bytes.
pub const DEFAULT_SERVER_LEN: usize = 128;
/// Default maximum channel name length in bytes.
pub const DEFAULT_CHAN_LEN: usize = 200;
/// Default maximum message body length in bytes.
pub const DEFAULT_MSG_LEN: usize = 512;
/// Default maximum relaybot delimiter length in bytes.
pub const DEFAULT_DELIM_LEN: usize = 10;

/// Length bounds shared by every component that stores or rewrites
/// message fields.
///
/// All bounds count bytes. Values longer than a bound are truncated on
/// assignment, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    /// Nickname bound (default: 128).
    /// Applies to ignore entries, relaybot keys and extracted nicknames.
    #[serde(default = "default_nick_len")]
    pub nick_len: usize,
    /// Server alias bound (default: 128).
    #[serde(default = "default_server_len")]
    pub server_len: usize,
    /// Channel name bound (default: 200).
    #[serde(default = "default_chan_len")]
    pub chan_len: usize,
    /// Message body bound (default: 512).
    #[serde(default = "default_msg_len")]
    pub msg_len: usize,
    /// Bound of each relaybot delimiter (default: 10).
    #[serde(default = "default_delim_len")]
    pub delim_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            nick_len: default_nick_len(),
            server_len: default_server_len(),
            chan_len: default_chan_len(),
            msg_len: default_msg_len(),
            delim_len: default_delim_len(),
        }
    }
}

fn default_nick_len() -> usize {
    DEFAULT_NICK_LEN
}

fn default_server_len() -> usize {
    DEFAULT_SERVER_LEN
}

fn default_chan_len() -> usize {
    DEFAULT_CHAN_LEN
}

fn default_msg_len() -> usize {
    DEFAULT_MSG_LEN
}

fn default_delim_len() -> usize {
    DEFAULT_DELIM_LEN
}
