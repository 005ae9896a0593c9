//! Notification domain module.
//!
//! - `notification` - Notification and its severity, message builders
//! - `slot` - At-most-one active notification with generation-tagged dismissal
//! - `timings` - Auto-dismiss delays

#[allow(clippy::module_inception)]
mod notification;
mod slot;
mod timings;

pub use notification::{Notification, NotificationSeverity};
pub use slot::NotificationSlot;
pub use timings::NotificationTimings;
