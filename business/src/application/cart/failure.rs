use crate::domain::cart::errors::CartError;
use crate::domain::notifier::{Notification, Notifier};

/// Raises the notification for a failed cart operation.
///
/// Every failure surfaces exactly one message. A stock shortfall has already
/// been announced by the stock check, so it does not raise the operation's
/// own message. A non-positive update amount never reaches this point.
pub(crate) fn report_failure(notifier: &dyn Notifier, fallback: Notification, error: &CartError) {
    match error {
        CartError::InsufficientStock { .. } => {}
        _ => notifier.notify_error(fallback),
    }
}
