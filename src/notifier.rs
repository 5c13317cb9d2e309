//! Transient error banner state.

use tokio::time::{Duration, Instant};

use crate::constants::DEFAULT_ERROR_DISPLAY_SECONDS;

/// Holds at most one error message and hides it after `display_for`.
#[derive(Debug, Clone)]
pub struct ErrorNotifier {
    message: Option<String>,
    shown_at: Option<Instant>,
    display_for: Duration,
}

impl Default for ErrorNotifier {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_ERROR_DISPLAY_SECONDS))
    }
}

impl ErrorNotifier {
    pub fn new(display_for: Duration) -> Self {
        Self {
            message: None,
            shown_at: None,
            display_for,
        }
    }

    /// Show `message`, restarting the display timer.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.shown_at = Some(Instant::now());
    }

    /// Hide the banner once its time is up. Returns true if it was hidden by this call.
    pub fn tick(&mut self) -> bool {
        match self.shown_at {
            Some(shown_at) if shown_at.elapsed() >= self.display_for => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.clear();
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.shown_at = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn hides_after_display_duration() {
        let mut notifier = ErrorNotifier::default();
        notifier.show("Failed to add task.");
        assert_eq!(notifier.message(), Some("Failed to add task."));

        tokio::time::advance(Duration::from_millis(3999)).await;
        assert!(!notifier.tick());
        assert!(notifier.is_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(notifier.tick());
        assert!(!notifier.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn new_message_restarts_timer() {
        let mut notifier = ErrorNotifier::new(Duration::from_secs(4));
        notifier.show("first");
        tokio::time::advance(Duration::from_secs(3)).await;
        notifier.show("second");
        tokio::time::advance(Duration::from_secs(3)).await;
        notifier.tick();
        assert_eq!(notifier.message(), Some("second"));
    }

    #[tokio::test]
    async fn dismiss_hides_immediately() {
        let mut notifier = ErrorNotifier::default();
        notifier.show("boom");
        notifier.dismiss();
        assert!(notifier.message().is_none());
        assert!(!notifier.tick());
    }
}
