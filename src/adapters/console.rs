use crate::domain::model::Severity;
use crate::domain::ports::{Navigator, Notifier};

/// Navigator for the CLI shell: route changes become log lines.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, path: &str) {
        tracing::info!("Navigating to {}", path);
    }
}

/// Notification sink that swallows everything. The notification surface
/// exists but is disabled in the current shells.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}
