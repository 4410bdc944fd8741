//! Session struct and conversation lifecycle management.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::prompt::{build_system_prompt, greeting};
use crate::Message;

use super::types::{SessionError, SessionSettings};

/// Number of trailing messages sent to the completion service per
/// request. Truncation is by position, not token count.
pub const HISTORY_WINDOW: usize = 10;

/// Default `max_tokens` cap sent with every completion request.
pub const MAX_COMPLETION_TOKENS: u32 = 500;

/// A conversation session: the active message list, settings, and the
/// archive of cleared conversations.
pub struct Session {
    /// Active conversation. Index 0 is always the system message.
    pub(super) messages: Vec<Message>,
    /// Settings in effect for the next submission.
    pub(super) settings: SessionSettings,
    /// Frozen copies of cleared conversations, oldest first.
    pub(super) archive: Vec<Vec<Message>>,
    /// Trailing-window size for completion requests.
    pub(super) history_window: usize,
    /// Token cap per completion request.
    pub(super) max_tokens: u32,
    /// Whether a completion request is outstanding.
    pub(super) busy: AtomicBool,
}

impl Session {
    /// Number of messages a fresh conversation is seeded with.
    pub(super) const SEED_LEN: usize = 2;

    /// Create a session seeded with a system message and greeting.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            messages: Self::seed(settings),
            settings,
            archive: Vec::new(),
            history_window: HISTORY_WINDOW,
            max_tokens: MAX_COMPLETION_TOKENS,
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn seed(settings: SessionSettings) -> Vec<Message> {
        vec![build_system_prompt(settings.language), greeting()]
    }

    /// Full active conversation, system message included.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the active conversation.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Archived conversations, oldest first.
    pub fn archive(&self) -> &[Vec<Message>] {
        &self.archive
    }

    /// Settings in effect for the next submission.
    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Whether a completion request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Replace the settings used for subsequent submissions.
    ///
    /// The active conversation's system message is not touched here;
    /// it is regenerated on the next `submit_user_turn`.
    pub fn update_settings(&mut self, settings: SessionSettings) {
        self.settings = settings;
    }

    /// Archive the current conversation and start a fresh one.
    ///
    /// A frozen copy is archived only if the conversation grew beyond
    /// its seeded system message and greeting. Rejected while a
    /// request is in flight.
    pub fn clear_conversation(&mut self) -> Result<(), SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        if self.messages.len() > Self::SEED_LEN {
            debug!(len = self.messages.len(), "archiving conversation");
            self.archive.push(self.messages.clone());
        }
        self.messages = Self::seed(self.settings);
        Ok(())
    }

    /// Replace the active conversation with a copy of an archived one.
    ///
    /// The archive entry itself is never mutated. Rejected while a
    /// request is in flight.
    pub fn restore_conversation(&mut self, index: usize) -> Result<(), SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        let archived = self
            .archive
            .get(index)
            .ok_or(SessionError::InvalidHistoryIndex(index))?;
        self.messages = archived.clone();
        Ok(())
    }

    /// The trailing window of messages sent with the next request.
    ///
    /// Truncation is positional: once the conversation grows past the
    /// window, the system message falls out of the request.
    pub(super) fn request_window(&self) -> &[Message] {
        let start = self.messages.len().saturating_sub(self.history_window);
        &self.messages[start..]
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
