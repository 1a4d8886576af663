use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    expires_at: Instant,
}

impl Notification {
    pub fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Transient messages, at most one per kind.
///
/// Pushing a notification replaces the previous one of the same kind.
#[derive(Debug)]
pub struct Notifications {
    error: Option<Notification>,
    success: Option<Notification>,
    error_ttl: Duration,
    success_ttl: Duration,
}

impl Notifications {
    pub fn new(error_ttl: Duration, success_ttl: Duration) -> Self {
        Self {
            error: None,
            success: None,
            error_ttl,
            success_ttl,
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push_at(NotificationKind::Error, message, Instant::now());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push_at(NotificationKind::Success, message, Instant::now());
    }

    pub fn push_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        match kind {
            NotificationKind::Error => {
                tracing::debug!("error notification: {}", message);
                self.error = Some(Notification {
                    kind,
                    message,
                    expires_at: now + self.error_ttl,
                });
            }
            NotificationKind::Success => {
                tracing::debug!("success notification: {}", message);
                self.success = Some(Notification {
                    kind,
                    message,
                    expires_at: now + self.success_ttl,
                });
            }
        }
    }

    pub fn dismiss(&mut self, kind: NotificationKind) {
        match kind {
            NotificationKind::Error => self.error = None,
            NotificationKind::Success => self.success = None,
        }
    }

    /// Live notifications at `now`, errors first. Expired ones are dropped.
    pub fn visible_at(&mut self, now: Instant) -> Vec<&Notification> {
        if self.error.as_ref().is_some_and(|n| !n.is_live(now)) {
            self.error = None;
        }
        if self.success.as_ref().is_some_and(|n| !n.is_live(now)) {
            self.success = None;
        }
        self.error.iter().chain(self.success.iter()).collect()
    }

    pub fn visible(&mut self) -> Vec<&Notification> {
        self.visible_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifications() -> Notifications {
        Notifications::new(Duration::from_millis(5000), Duration::from_millis(4000))
    }

    #[test]
    fn new_notification_replaces_same_kind() {
        let mut n = notifications();
        let now = Instant::now();
        n.push_at(NotificationKind::Error, "first", now);
        n.push_at(NotificationKind::Error, "second", now);

        let visible = n.visible_at(now);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "second");
    }

    #[test]
    fn one_of_each_kind_errors_first() {
        let mut n = notifications();
        let now = Instant::now();
        n.push_at(NotificationKind::Success, "added", now);
        n.push_at(NotificationKind::Error, "oops", now);

        let kinds: Vec<_> = n.visible_at(now).iter().map(|v| v.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Error, NotificationKind::Success]);
    }

    #[test]
    fn notifications_expire_per_kind() {
        let mut n = notifications();
        let now = Instant::now();
        n.push_at(NotificationKind::Error, "oops", now);
        n.push_at(NotificationKind::Success, "added", now);

        let later = now + Duration::from_millis(4500);
        let visible = n.visible_at(later);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, NotificationKind::Error);

        assert!(n.visible_at(now + Duration::from_millis(5000)).is_empty());
    }

    #[test]
    fn dismiss_removes_only_that_kind() {
        let mut n = notifications();
        let now = Instant::now();
        n.push_at(NotificationKind::Error, "oops", now);
        n.push_at(NotificationKind::Success, "added", now);
        n.dismiss(NotificationKind::Error);

        let visible = n.visible_at(now);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "added");
    }
}
