//! Runtime settings for the plans handlers and page sessions.

use std::time::Duration;

use crate::domain::notification::NotificationTimings;
use crate::domain::plans::TierVisibility;

/// Behavior knobs shared by handlers, page sessions and the HTTP adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlansSettings {
    pub visibility: TierVisibility,
    pub timings: NotificationTimings,
    pub lookup_timeout: Duration,
}

impl Default for PlansSettings {
    fn default() -> Self {
        Self {
            visibility: TierVisibility::default(),
            timings: NotificationTimings::default(),
            lookup_timeout: Duration::from_secs(5),
        }
    }
}
