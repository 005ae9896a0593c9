//! Plan reader port.
//!
//! Reads the one field this crate needs from the viewer's profile record:
//! the persisted plan identifier, raw and un-normalized.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Read access to a viewer's persisted plan.
#[async_trait]
pub trait PlanReader: Send + Sync {
    /// Returns the raw `plan_id` of the viewer's profile.
    ///
    /// `Ok(None)` when there is no profile record or the field is null.
    async fn get_plan_id(&self, user_id: &UserId) -> Result<Option<String>, DomainError>;
}
