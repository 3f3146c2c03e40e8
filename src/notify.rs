//! User-facing notification seam.
//!
//! The policy layer announces the outcome of every operation through a
//! [`Notifier`]; the reducer never emits notices. Embedding views render
//! these as toasts or status lines; headless embedders can log or record
//! them.

use std::sync::Mutex;

/// Severity of a notice, mirroring success/error toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that forwards notices to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeLevel::Error => tracing::warn!(message = %notice.message, "notice"),
        }
    }
}

/// Notifier that records notices in memory, for tests and headless
/// embedders that poll for messages.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice lock poisoned").clone()
    }

    /// Drain and return the recorded notices.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().expect("notice lock poisoned"))
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().expect("notice lock poisoned").push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Notice::success("first"));
        notifier.notify(Notice::error("second"));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[1].message, "second");
    }

    #[test]
    fn take_drains_the_buffer() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Notice::success("once"));

        assert_eq!(notifier.take().len(), 1);
        assert!(notifier.notices().is_empty());
    }
}
