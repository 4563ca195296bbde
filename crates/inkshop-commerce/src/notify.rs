//! Transient user notifications.
//!
//! The cart does not draw notifications itself. It hands them to an
//! optional [`Notifier`] owned by the page, which also owns the
//! auto-dismiss timer.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    #[default]
    Info,
    Error,
}

impl NotificationKind {
    /// CSS class name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message to show the user briefly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Notifier that keeps everything it receives.
///
/// Clones share the same list, so a host can hand one clone to the cart
/// and drain the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }

    /// Drain everything received so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.received.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.borrow_mut().push(notification);
    }
}
