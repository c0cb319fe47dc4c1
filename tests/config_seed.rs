//! Integration tests for loading a config file and seeding the filter.

mod common;

use common::display;
use slirc_filter::Registry;
use slirc_filter::config::{self, Config, ConfigError, ValidationError};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_seeded_registry_filters() {
    let file = write_config(
        r#"
[limits]
nick_len = 6

[filter]
ignore = ["spammer"]

[[filter.relaybot]]
nick = "xmppbot"
left = "["
right = "] "
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert!(config::validate(&config).is_ok());

    let mut registry = Registry::with_limits(config.limits);
    registry.seed(&config.filter);

    let shown = display(&registry, &[("spammer", "buy now"), ("xmppbot", "[Alexandra] hi")]);
    assert_eq!(shown.len(), 1);
    // Extracted nick is cut to nick_len
    assert_eq!(shown[0].sender_nick, "Alexan");
    assert_eq!(shown[0].server_alias, "xmppbot");
    assert_eq!(shown[0].body, "hi");
}

#[test]
fn test_relaybot_key_cut_to_nick_len() {
    let file = write_config(
        r#"
[limits]
nick_len = 4

[[filter.relaybot]]
nick = "xmppbot"
left = "["
right = "] "
"#,
    );
    let config = Config::load(file.path()).unwrap();
    let mut registry = Registry::with_limits(config.limits);
    registry.seed(&config.filter);

    // Any nick sharing the first four bytes addresses the same bot
    assert!(registry.find_relaybot("xmpp").is_some());
    assert!(registry.find_relaybot("xmppgate").is_some());
    assert!(registry.find_relaybot("xmp").is_none());
}

#[test]
fn test_invalid_config_reports_every_error() {
    let file = write_config(
        r#"
[limits]
msg_len = 0

[filter]
ignore = [""]

[[filter.relaybot]]
nick = "bot"

[[filter.relaybot]]
nick = "bot"
"#,
    );
    let config = Config::load(file.path()).unwrap();
    let errors = config::validate(&config).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ValidationError::ZeroLimit("msg_len")))
    );
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ValidationError::EmptyIgnoreNick))
    );
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ValidationError::DuplicateRelaybot(n) if n == "bot"))
    );
}

#[test]
fn test_unparseable_config() {
    let file = write_config("[[filter.relaybot]]\nleft = \"[\"\n");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
