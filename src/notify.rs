//! One-shot, delayed, auto-dismissing user-facing notifications.
//!
//! At most one notification is visible at a time. A newer `schedule`
//! pre-empts an older pending one and replaces a visible one; `dismiss`
//! hides immediately and is idempotent. A superseded auto-dismiss timer
//! never clears a newer notification (generation-guarded).
//!
//! `schedule` spawns onto the ambient tokio runtime, so callers must be
//! inside one.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a surfaced notification stays visible unless dismissed.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// A surfaced user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

struct NotifierState {
    current: Option<Notification>,
    /// Generation of the notification currently (or last) surfaced.
    visible_gen: u64,
    /// Generation handed to the most recent `schedule` call.
    scheduled_gen: u64,
}

/// Shared handle to the notification cell. Cheap to clone; the UI keeps
/// one to poll `current`, the session keeps one to schedule outcomes.
#[derive(Clone)]
pub struct Notifier {
    state: Arc<Mutex<NotifierState>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(NotifierState {
                current: None,
                visible_gen: 0,
                scheduled_gen: 0,
            })),
        }
    }

    /// Surface `message` after `delay`, then auto-dismiss after
    /// [`AUTO_DISMISS`] unless dismissed or superseded first.
    pub fn schedule(&self, message: impl Into<String>, kind: NotificationKind, delay: Duration) {
        let notification = Notification { message: message.into(), kind };

        let my_gen = {
            let mut state = self.state.lock().unwrap();
            state.scheduled_gen += 1;
            state.scheduled_gen
        };

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            {
                let mut s = state.lock().unwrap();
                // A newer schedule pre-empts this one before it fires.
                if s.scheduled_gen != my_gen {
                    return;
                }
                tracing::debug!("Surfacing notification: {}", notification.message);
                s.current = Some(notification);
                s.visible_gen = my_gen;
            }

            tokio::time::sleep(AUTO_DISMISS).await;

            let mut s = state.lock().unwrap();
            if s.visible_gen == my_gen {
                s.current = None;
            }
        });
    }

    /// Hide the current notification immediately. Idempotent.
    pub fn dismiss(&self) {
        self.state.lock().unwrap().current = None;
    }

    /// What the UI should currently render, if anything.
    pub fn current(&self) -> Option<Notification> {
        self.state.lock().unwrap().current.clone()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
