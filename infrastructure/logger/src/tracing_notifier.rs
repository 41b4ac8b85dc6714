use business::domain::notifier::{Notification, Notifier};
use tracing::warn;

/// Headless notification surface: each user-facing message becomes a
/// `notification` event that front-ends tailing the log can display.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, notification: Notification) {
        warn!(target: "notification", kind = ?notification, "{}", notification.message());
    }
}
