//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::bounded::truncate;
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("limits.{0} must be greater than zero")]
    ZeroLimit(&'static str),
    #[error("filter.ignore contains an empty nickname")]
    EmptyIgnoreNick,
    #[error("filter.relaybot[{0}].nick is required")]
    EmptyRelaybotNick(usize),
    #[error("filter.relaybot nick '{0}' is declared more than once")]
    DuplicateRelaybot(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let limits = &config.limits;
    for (name, value) in [
        ("nick_len", limits.nick_len),
        ("server_len", limits.server_len),
        ("chan_len", limits.chan_len),
        ("msg_len", limits.msg_len),
        ("delim_len", limits.delim_len),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroLimit(name));
        }
    }

    if config.filter.ignore.iter().any(|nick| nick.is_empty()) {
        errors.push(ValidationError::EmptyIgnoreNick);
    }

    // Relaybots are keyed on the nick cut to nick_len
    let mut seen = HashSet::new();
    for (idx, bot) in config.filter.relaybot.iter().enumerate() {
        if bot.nick.is_empty() {
            errors.push(ValidationError::EmptyRelaybotNick(idx));
        } else if !seen.insert(truncate(&bot.nick, limits.nick_len)) {
            errors.push(ValidationError::DuplicateRelaybot(bot.nick.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_limit_fails() {
        let config: Config = toml::from_str(
            r#"
[limits]
nick_len = 0
delim_len = 0
"#,
        )
        .unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::ZeroLimit("nick_len")))
        );
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::ZeroLimit("delim_len")))
        );
    }

    #[test]
    fn test_empty_nicks_fail() {
        let config: Config = toml::from_str(
            r#"
[filter]
ignore = [""]

[[filter.relaybot]]
nick = ""
left = "<"
right = ">"
"#,
        )
        .unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::EmptyIgnoreNick))
        );
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::EmptyRelaybotNick(0)))
        );
    }

    #[test]
    fn test_duplicate_relaybot_fails() {
        let config: Config = toml::from_str(
            r#"
[[filter.relaybot]]
nick = "bot"
left = "["
right = "]"

[[filter.relaybot]]
nick = "bot"
left = "{"
right = "}"
"#,
        )
        .unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::DuplicateRelaybot(n) if n == "bot"))
        );
    }

    #[test]
    fn test_duplicate_after_nick_len_cut_fails() {
        let config: Config = toml::from_str(
            r#"
[limits]
nick_len = 4

[[filter.relaybot]]
nick = "xmppbot"
left = "["
right = "] "

[[filter.relaybot]]
nick = "xmppgate"
left = "<"
right = "> "
"#,
        )
        .unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::DuplicateRelaybot(n) if n == "xmppgate"))
        );
    }

    #[test]
    fn test_distinct_nicks_within_nick_len_pass() {
        let config: Config = toml::from_str(
            r#"
[limits]
nick_len = 4

[[filter.relaybot]]
nick = "xmppbot"

[[filter.relaybot]]
nick = "tgbot"
"#,
        )
        .unwrap();
        assert!(validate(&config).is_ok());
    }
}
