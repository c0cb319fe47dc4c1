//! UI to server-management forwarding.
//!
//! The UI layer never talks to a server connection directly. User actions
//! (raw command, join, part, send) go through [`UiInterface`], which resolves
//! the server and channel names from the focused chat window and hands them
//! to a [`ServerBackend`].

use tracing::{debug, error};

use crate::bounded::truncate;
use crate::config::LimitsConfig;
use crate::error::{BackendError, UiError};

/// Server-management component that executes user actions.
pub trait ServerBackend {
    /// Execute a client command (e.g., `/join #rust`). Both names are
    /// `None` when no chat window is open.
    fn server_cmd(
        &mut self,
        server: Option<&str>,
        channel: Option<&str>,
        cmd: &str,
    ) -> Result<(), BackendError>;

    fn server_join(&mut self, server: &str, channel: &str) -> Result<(), BackendError>;

    fn server_part(&mut self, server: &str, channel: &str) -> Result<(), BackendError>;

    /// Send a chat line to `channel` (a channel or a query nickname).
    fn server_send(&mut self, server: &str, channel: &str, msg: &str) -> Result<(), BackendError>;
}

/// A chat window tab bound to one server and one target.
pub trait ChannelView {
    fn server_name(&self) -> &str;
    fn name(&self) -> &str;
}

/// The main window, tracking which tab has focus.
pub trait WindowView {
    type Channel: ChannelView;

    fn current_channel(&self) -> Option<&Self::Channel>;
}

/// Forwards UI actions to the backend.
pub struct UiInterface<W, B> {
    window: W,
    backend: B,
    limits: LimitsConfig,
}

impl<W: WindowView, B: ServerBackend> UiInterface<W, B> {
    pub fn new(window: W, backend: B) -> Self {
        Self::with_limits(window, backend, LimitsConfig::default())
    }

    pub fn with_limits(window: W, backend: B, limits: LimitsConfig) -> Self {
        Self {
            window,
            backend,
            limits,
        }
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Execute `cmd` in the context of `chan`, or of the focused channel
    /// when `chan` is `None`. Without any channel the command runs with no
    /// server context.
    pub fn server_cmd(&mut self, chan: Option<&W::Channel>, cmd: &str) -> Result<(), UiError> {
        let chan = chan.or_else(|| self.window.current_channel());
        match chan {
            Some(chan) => {
                debug!(
                    server = %chan.server_name(),
                    channel = %chan.name(),
                    cmd = %cmd,
                    "Forwarding command"
                );
                self.backend.server_cmd(Some(chan.server_name()), Some(chan.name()), cmd)?;
            }
            None => {
                debug!(cmd = %cmd, "Forwarding command without channel");
                self.backend.server_cmd(None, None, cmd)?;
            }
        }
        Ok(())
    }

    /// Join `chan_name` on the server of the focused channel.
    pub fn server_join(&mut self, chan_name: &str) -> Result<(), UiError> {
        let Some(current) = self.window.current_channel() else {
            error!(channel = %chan_name, "Cannot join: no current channel");
            return Err(UiError::NoCurrentChannel("join"));
        };
        let chan_name = truncate(chan_name, self.limits.chan_len);
        debug!(server = %current.server_name(), channel = %chan_name, "Forwarding join");
        self.backend.server_join(current.server_name(), chan_name)?;
        Ok(())
    }

    /// Leave `chan`.
    pub fn server_part(&mut self, chan: &W::Channel) -> Result<(), UiError> {
        debug!(server = %chan.server_name(), channel = %chan.name(), "Forwarding part");
        self.backend.server_part(chan.server_name(), chan.name())?;
        Ok(())
    }

    /// Send `msg` to `chan`. A missing channel is reported, not guessed.
    pub fn server_send(&mut self, chan: Option<&W::Channel>, msg: &str) -> Result<(), UiError> {
        let Some(chan) = chan else {
            error!(msg = %msg, "Cannot send: no channel");
            return Err(UiError::NoChannel);
        };
        self.backend.server_send(chan.server_name(), chan.name(), msg)?;
        Ok(())
    }
}
