//! Unified error handling for slirc-filter.
//!
//! Registry mutations and UI forwarding report expected, recoverable
//! failures through the enums below. None of them are fatal.

use thiserror::Error;

// ============================================================================
// Registry Errors (ignore list / relaybot list mutations)
// ============================================================================

/// Errors returned by [`Registry`](crate::filter::Registry) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("{0} not found")]
    NotFound(String),
}

impl RegistryError {
    /// Get a static error code string for labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "already_exists",
            Self::NotFound(_) => "not_found",
        }
    }
}

/// Result type for registry mutations.
pub type RegistryResult = Result<(), RegistryError>;

// ============================================================================
// UI Errors (command forwarding)
// ============================================================================

/// Failure reported by a server-management backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Errors returned by [`UiInterface`](crate::ui::UiInterface).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A channel-scoped action was requested without a channel.
    #[error("no channel given")]
    NoChannel,

    /// The window has no focused channel to take the server from.
    #[error("no current channel for {0}")]
    NoCurrentChannel(&'static str),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
