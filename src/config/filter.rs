//! Startup seed lists for the message filter.

use serde::Deserialize;

/// Filter configuration: nicknames to ignore and relaybots to unwrap.
///
/// These lists only seed the in-memory [`Registry`](crate::filter::Registry)
/// at startup. Runtime changes are not written back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    /// Nicknames whose messages are dropped.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Relaybot blocks.
    #[serde(default)]
    pub relaybot: Vec<RelaybotBlock>,
}

/// Relaybot block configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RelaybotBlock {
    /// Nickname of the bridge account.
    pub nick: String,
    /// Marker before the relayed nickname (e.g., "[").
    #[serde(default)]
    pub left: String,
    /// Marker after the relayed nickname (e.g., "] ").
    #[serde(default)]
    pub right: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_is_default() {
        let config: FilterConfig = toml::from_str("").unwrap();
        assert!(config.ignore.is_empty());
        assert!(config.relaybot.is_empty());
    }

    #[test]
    fn relaybot_blocks_parse() {
        let config: FilterConfig = toml::from_str(
            r#"
ignore = ["spammer", "troll"]

[[relaybot]]
nick = "xmppbot"
left = "["
right = "] "

[[relaybot]]
nick = "tgbot"
"#,
        )
        .unwrap();
        assert_eq!(config.ignore, vec!["spammer", "troll"]);
        assert_eq!(config.relaybot.len(), 2);
        assert_eq!(config.relaybot[0].right, "] ");
        assert!(config.relaybot[1].left.is_empty());
    }
}
