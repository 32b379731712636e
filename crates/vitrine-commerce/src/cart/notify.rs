//! User-facing notifications emitted by cart mutations.
//!
//! Delivery is fire-and-forget: the cart never blocks on, or fails because
//! of, a notification. The presentation layer decides how to render them.

use serde::{Deserialize, Serialize};
use std::sync::mpsc;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Severity {
    /// Informational (item added, quantity updated).
    #[default]
    Default,
    /// Something was refused or capped (unavailable variant, stock limit).
    Destructive,
}

/// A toast-style message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Short title, e.g. "Added to Cart".
    pub title: String,
    /// One-line description naming the affected product and variant.
    pub description: String,
    /// Visual severity.
    pub severity: Severity,
}

impl Notification {
    /// An informational notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    /// A destructive notification.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Consumer of cart notifications.
pub trait NotificationSink {
    /// Deliver a notification. Best-effort; must not block.
    fn notify(&self, notification: Notification);
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: Notification) {}
}

/// Forwards notifications into an mpsc channel for the presentation layer
/// to drain at its own pace.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Notification>,
}

impl ChannelSink {
    /// Create a sink and the receiving end of its channel.
    pub fn new() -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: Notification) {
        // A dropped receiver just means nobody is listening anymore.
        let _ = self.tx.send(notification);
    }
}
