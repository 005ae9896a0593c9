//! Auto-dismiss delays per severity.

use std::time::Duration;

use super::NotificationSeverity;

/// How long each kind of notification stays visible.
///
/// `None` keeps the notification until the next action replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub info: Option<Duration>,
    pub success: Option<Duration>,
    pub error: Option<Duration>,
}

impl NotificationTimings {
    pub fn dismiss_after(&self, severity: NotificationSeverity) -> Option<Duration> {
        match severity {
            NotificationSeverity::Info => self.info,
            NotificationSeverity::Success => self.success,
            NotificationSeverity::Error => self.error,
        }
    }
}

impl Default for NotificationTimings {
    /// Info 3 s, success 4 s, errors stay.
    fn default() -> Self {
        Self {
            info: Some(Duration::from_secs(3)),
            success: Some(Duration::from_secs(4)),
            error: None,
        }
    }
}
