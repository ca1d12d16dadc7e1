//! Single-slot transient notifications
//!
//! Only the latest message is observable. Posting restarts the auto-dismiss
//! timer; the previous timer is aborted under the same lock that installs the
//! new message, and a timer only clears the message it was started for.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Severity level for notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A posted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub posted_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            posted_at: Instant::now(),
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    current: Option<Notification>,
    /// Bumped on every post and dismiss
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl Slot {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[derive(Debug)]
pub struct NotificationChannel {
    slot: Arc<Mutex<Slot>>,
    dismiss_after: Duration,
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::with_dismiss_after(DEFAULT_DISMISS_AFTER)
    }

    pub fn with_dismiss_after(dismiss_after: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            dismiss_after,
        }
    }

    /// Replace the current message and restart the dismiss timer.
    ///
    /// Outside a tokio runtime the message stays until [`dismiss`](Self::dismiss)
    /// or the next post.
    pub fn post(&self, notification: Notification) {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.cancel_timer();
        tracing::debug!("notification: {}", notification.message);
        slot.current = Some(notification);
        slot.timer = self.schedule_dismiss(slot.generation);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.post(Notification::new(message, NotificationLevel::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.post(Notification::new(message, NotificationLevel::Error));
    }

    /// Clear the current message and cancel its timer
    pub fn dismiss(&self) {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.cancel_timer();
        slot.current = None;
    }

    pub fn current(&self) -> Option<Notification> {
        self.slot.lock().current.clone()
    }

    pub fn message(&self) -> Option<String> {
        self.slot.lock().current.as_ref().map(|n| n.message.clone())
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    fn schedule_dismiss(&self, generation: u64) -> Option<JoinHandle<()>> {
        let runtime = tokio::runtime::Handle::try_current().ok()?;
        let slot = Arc::downgrade(&self.slot);
        let delay = self.dismiss_after;

        Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(slot) = slot.upgrade() else {
                return;
            };
            let mut slot = slot.lock();
            if slot.generation == generation {
                slot.current = None;
                slot.timer = None;
            }
        }))
    }
}

impl Drop for NotificationChannel {
    fn drop(&mut self) {
        self.slot.lock().cancel_timer();
    }
}
