//! Session settings, errors, and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::prompt::Language;

/// User-controlled parameters affecting prompt construction and
/// generation. Process-wide for the lifetime of one session; mutated
/// only through `Session::update_settings`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub language: Language,
    pub temperature: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            language: Language::English,
            temperature: 0.3,
        }
    }
}

/// Errors surfaced by session operations.
///
/// Completion failures never appear here; they are absorbed into the
/// conversation as visible assistant messages.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a completion request is already in flight")]
    Busy,

    #[error("no archived conversation at index {0}")]
    InvalidHistoryIndex(usize),
}

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
///
/// Holding the guard is the `AwaitingCompletion` state; everything
/// else is `Idle`.
#[derive(Debug)]
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy flag. Returns `Err(Busy)` if a
    /// request is already outstanding.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, SessionError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SessionError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_while_held_is_busy() {
        let flag = AtomicBool::new(false);
        let guard = BusyGuard::acquire(&flag).unwrap();
        assert_eq!(BusyGuard::acquire(&flag).unwrap_err(), SessionError::Busy);
        drop(guard);
        assert!(BusyGuard::acquire(&flag).is_ok());
    }

    #[test]
    fn guard_releases_on_drop() {
        let flag = AtomicBool::new(false);
        {
            let _guard = BusyGuard::acquire(&flag).unwrap();
            assert!(flag.load(Ordering::Acquire));
        }
        assert!(!flag.load(Ordering::Acquire));
    }

    #[test]
    fn default_settings() {
        let settings = SessionSettings::default();
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.temperature, 0.3);
    }
}
