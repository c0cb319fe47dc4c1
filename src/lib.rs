//! # slirc-filter
//!
//! Client-side message filtering for a graphical IRC client.
//!
//! ## Features
//!
//! - Ignore list: drop lines from unwanted nicknames before display
//! - Relaybot unwrapping: re-attribute lines relayed by bridge bots
//!   (`[Lisa] hello` from `xmppbot` becomes `hello` from `Lisa`)
//! - UI forwarding: route send/join/part/raw commands from chat windows to
//!   the server-management backend
//! - TOML configuration for length bounds and startup seed lists
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_filter::{IncomingMessage, Registry, Verdict, process};
//!
//! let mut registry = Registry::new();
//! registry.add_relaybot("xmppbot", "[", "] ").unwrap();
//! registry.add_ignore("spammer").unwrap();
//!
//! let mut msg = IncomingMessage::new("xmppbot", "[Lisa] hello");
//! assert_eq!(process(&registry, &mut msg), Verdict::Deliver { rewritten: true });
//! assert_eq!(msg.sender_nick, "Lisa");
//! assert_eq!(msg.server_alias, "xmppbot");
//! assert_eq!(msg.body, "hello");
//! ```

pub mod bounded;
pub mod config;
pub mod driver;
pub mod error;
pub mod filter;
pub mod message;
pub mod ui;

pub use config::{Config, LimitsConfig};
pub use error::{BackendError, RegistryError, UiError};
pub use filter::{Registry, RelaybotDescriptor, Verdict, process, should_ignore};
pub use message::IncomingMessage;
pub use ui::{ChannelView, ServerBackend, UiInterface, WindowView};
