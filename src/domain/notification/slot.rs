//! Single-slot notification state.
//!
//! At most one notification is active. Showing a new one replaces the old
//! one; each show gets a generation number so that a dismiss timer scheduled
//! for an older notification cannot clear a newer one.

use super::Notification;

#[derive(Debug, Clone)]
struct Active {
    generation: u64,
    notification: Notification,
}

/// Holder for the one visible notification.
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    active: Option<Active>,
    last_generation: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active notification, returning its generation.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.last_generation += 1;
        self.active = Some(Active {
            generation: self.last_generation,
            notification,
        });
        self.last_generation
    }

    /// Dismisses the notification of `generation` if it is still shown.
    ///
    /// Returns true if something was cleared.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match &self.active {
            Some(active) if active.generation == generation => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Clears whatever is shown.
    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.active.as_ref().map(|a| &a.notification)
    }
}
