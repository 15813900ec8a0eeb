//! In-terminal toast stack

use super::traits::{Notification, Notifier, Variant};
use crate::flow::{Clock, SystemClock};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A notification currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// Keeps the most recent notifications visible for a limited time
#[derive(Debug)]
pub struct ToastCenter<C: Clock = SystemClock> {
    toasts: VecDeque<Toast>,
    duration: Duration,
    max_visible: usize,
    clock: C,
}

impl<C: Clock> ToastCenter<C> {
    pub fn new(clock: C, duration: Duration, max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
            max_visible: max_visible.max(1),
            clock,
        }
    }

    /// Drop toasts that have been shown for longer than the configured duration
    pub fn prune(&mut self) {
        let now = self.clock.now();
        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < duration);
    }

    /// Toasts in display order, newest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// When the oldest toast should disappear
    pub fn next_expiry(&self) -> Option<Instant> {
        self.toasts.front().map(|t| t.shown_at + self.duration)
    }
}

impl<C: Clock> Notifier for ToastCenter<C> {
    fn notify(&mut self, notification: Notification) {
        let payload = serde_json::to_string(&notification).unwrap_or_default();
        match notification.variant {
            Variant::Default => tracing::info!(%payload, "toast"),
            Variant::Destructive => tracing::warn!(%payload, "toast"),
        }

        if self.toasts.len() >= self.max_visible {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            shown_at: self.clock.now(),
        });
    }
}
