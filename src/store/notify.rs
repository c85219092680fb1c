//! Transient notification channel
//!
//! Mutations settle after the dialog has already closed, so their outcome
//! travels through this channel to the snackbar instead of the form.

/// How long a notice stays on screen before auto-dismissal.
pub const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Single-slot notice holder; a new notice replaces the visible one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifier {
    next_id: u64,
    current: Option<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&mut self, kind: NoticeKind, message: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notice { id, kind, message });
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Dismiss by id, so the auto-dismiss timer of an older notice cannot
    /// clear a newer one that replaced it.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
        }
    }
}
