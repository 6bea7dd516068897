use std::time::{Duration, Instant};

/// Quiet period used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(60);

/// Coalesces a burst of notifications into one trigger.
///
/// Every `notify` restarts the quiet period. `poll` reports `true` exactly
/// once, the first time it is called after the period has elapsed without a
/// new notification.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_notify: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, last_notify: None }
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an event at `now`, pushing the trigger back.
    pub fn notify(&mut self, now: Instant) {
        self.last_notify = Some(now);
    }

    /// True once the quiet period after the last notification has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_notify {
            Some(at) if now.saturating_duration_since(at) >= self.delay => {
                self.last_notify = None;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.last_notify.is_some()
    }

    /// Drops a pending trigger.
    pub fn cancel(&mut self) {
        self.last_notify = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
