use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.push(message, NotificationKind::Info, Instant::now());
    }

    pub fn show_error(&mut self, message: &str) {
        self.push(message, NotificationKind::Error, Instant::now());
    }

    /// Replace any visible notification, starting its timer at `now`
    pub fn push(&mut self, message: &str, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            expires_at: now + DEFAULT_DURATION,
        });
    }

    /// Drop the notification once its time is up; returns true if one was dropped
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        assert!(NotificationState::new().current().is_none());
    }

    #[test]
    fn test_show_sets_info() {
        let mut state = NotificationState::new();
        state.show("Link copied");

        let current = state.current().unwrap();
        assert_eq!(current.message, "Link copied");
        assert_eq!(current.kind, NotificationKind::Info);
    }

    #[test]
    fn test_newer_notification_replaces_older() {
        let mut state = NotificationState::new();
        state.show("first");
        state.show_error("second");

        let current = state.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotificationKind::Error);
    }

    #[test]
    fn test_expire_keeps_fresh_notification() {
        let mut state = NotificationState::new();
        let t0 = Instant::now();
        state.push("hello", NotificationKind::Info, t0);

        assert!(!state.expire(t0 + Duration::from_millis(100)));
        assert!(state.current().is_some());
    }

    #[test]
    fn test_expire_drops_old_notification() {
        let mut state = NotificationState::new();
        let t0 = Instant::now();
        state.push("hello", NotificationKind::Info, t0);

        assert!(state.expire(t0 + DEFAULT_DURATION));
        assert!(state.current().is_none());
        assert!(!state.expire(t0 + DEFAULT_DURATION * 2));
    }
}
