//! In-Memory Plan Reader Adapter
//!
//! Keeps viewer plan records in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::PlanReader;

/// In-memory profile plan records.
///
/// A record value of `None` models a profile whose `plan_id` is null.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanReader {
    records: Arc<RwLock<HashMap<UserId, Option<String>>>>,
    latency: Option<Duration>,
    failing: Arc<AtomicBool>,
}

impl InMemoryPlanReader {
    /// Create an empty reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every read, to exercise slow lookups
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Store a viewer's raw plan identifier
    pub async fn set_plan(&self, user_id: UserId, plan_id: Option<&str>) {
        self.records
            .write()
            .await
            .insert(user_id, plan_id.map(str::to_string));
    }

    /// Make subsequent reads fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored records
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl PlanReader for InMemoryPlanReader {
    async fn get_plan_id(&self, user_id: &UserId) -> Result<Option<String>, DomainError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated read failure",
            ));
        }
        Ok(self.records.read().await.get(user_id).cloned().flatten())
    }
}
