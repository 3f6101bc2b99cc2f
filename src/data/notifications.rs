//! Transient toast notifications
//!
//! The page core only ever *emits* notifications through [`Notifier`]; it
//! never reads anything back. [`NotificationCenter`] is the queue the TUI
//! draws from and expires on its own clock.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Sink for fire-and-forget notifications
pub trait Notifier {
    fn notify(&mut self, level: NotificationLevel, message: &str);

    fn success(&mut self, message: &str) {
        self.notify(NotificationLevel::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(NotificationLevel::Error, message);
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created: Instant,
}

/// Bounded queue of live toasts
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    queue: VecDeque<Notification>,
    duration: Duration,
    max_visible: usize,
}

impl NotificationCenter {
    pub fn new(duration: Duration, max_visible: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(max_visible),
            duration,
            max_visible: max_visible.max(1),
        }
    }

    /// Push a notification stamped with an explicit time
    pub fn push_at(&mut self, level: NotificationLevel, message: &str, now: Instant) {
        while self.queue.len() >= self.max_visible {
            self.queue.pop_front();
        }
        self.queue.push_back(Notification {
            level,
            message: message.to_string(),
            created: now,
        });
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn prune_expired(&mut self, now: Instant) -> bool {
        let before = self.queue.len();
        let duration = self.duration;
        self.queue
            .retain(|n| now.saturating_duration_since(n.created) < duration);
        self.queue.len() != before
    }

    /// Live toasts, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        self.push_at(level, message, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_expire() {
        let mut center = NotificationCenter::new(Duration::from_millis(100), 3);
        let start = Instant::now();
        center.push_at(NotificationLevel::Success, "saved", start);
        assert_eq!(center.len(), 1);

        assert!(!center.prune_expired(start + Duration::from_millis(50)));
        assert_eq!(center.len(), 1);

        assert!(center.prune_expired(start + Duration::from_millis(100)));
        assert!(center.is_empty());
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut center = NotificationCenter::new(Duration::from_secs(5), 2);
        let now = Instant::now();
        center.push_at(NotificationLevel::Error, "one", now);
        center.push_at(NotificationLevel::Error, "two", now);
        center.push_at(NotificationLevel::Success, "three", now);

        let messages: Vec<&str> = center.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_zero_max_visible_still_shows_one() {
        let mut center = NotificationCenter::new(Duration::from_secs(5), 0);
        center.error("oops");
        center.success("fine");
        assert_eq!(center.len(), 1);
        assert_eq!(center.visible().next().map(|n| n.level), Some(NotificationLevel::Success));
    }
}
