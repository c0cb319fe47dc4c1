//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level config struct and loading (Config, ConfigError)
//! - [`limits`]: Field length bounds (LimitsConfig)
//! - [`filter`]: Ignore and relaybot seed lists (FilterConfig, RelaybotBlock)
//! - [`validation`]: Startup validation

mod filter;
mod limits;
mod types;
pub mod validation;

pub use filter::{FilterConfig, RelaybotBlock};
pub use limits::{
    DEFAULT_CHAN_LEN, DEFAULT_DELIM_LEN, DEFAULT_MSG_LEN, DEFAULT_NICK_LEN, DEFAULT_SERVER_LEN,
    LimitsConfig,
};
pub use types::{Config, ConfigError};
pub use validation::{ValidationError, validate};
