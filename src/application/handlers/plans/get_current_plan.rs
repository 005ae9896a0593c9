//! GetCurrentPlanHandler - Query handler for the viewer's current plan.
//!
//! Never fails: anonymous viewers, missing records, read errors and slow
//! reads all resolve to the free plan. Failures are logged, not surfaced.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::plans::PlanId;
use crate::ports::PlanReader;

/// Query for the viewer's current plan.
#[derive(Debug, Clone)]
pub struct GetCurrentPlanQuery {
    /// `None` for anonymous viewers.
    pub viewer: Option<UserId>,
}

/// Where the resolved plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// No authenticated viewer.
    Anonymous,
    /// Read from the viewer's profile.
    Stored,
    /// The profile or its `plan_id` is missing.
    NoRecord,
    /// The read failed or timed out.
    Fallback,
}

/// The viewer's canonical plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentPlan {
    pub plan_id: PlanId,
    pub display_name: String,
    pub source: PlanSource,
}

impl CurrentPlan {
    pub fn new(plan_id: PlanId, source: PlanSource) -> Self {
        Self {
            display_name: plan_id.display_name(),
            plan_id,
            source,
        }
    }

    /// Free plan, used whenever nothing better is known.
    pub fn free(source: PlanSource) -> Self {
        Self::new(PlanId::free(), source)
    }
}

/// Handler resolving the viewer's plan through the `PlanReader` port.
#[derive(Clone)]
pub struct GetCurrentPlanHandler {
    reader: Arc<dyn PlanReader>,
    lookup_timeout: Duration,
}

impl GetCurrentPlanHandler {
    pub fn new(reader: Arc<dyn PlanReader>, lookup_timeout: Duration) -> Self {
        Self {
            reader,
            lookup_timeout,
        }
    }

    pub async fn handle(&self, query: GetCurrentPlanQuery) -> CurrentPlan {
        let Some(viewer) = query.viewer else {
            return CurrentPlan::free(PlanSource::Anonymous);
        };

        let lookup = tokio::time::timeout(self.lookup_timeout, self.reader.get_plan_id(&viewer));
        match lookup.await {
            Ok(Ok(Some(raw))) => {
                let plan_id = PlanId::parse(&raw);
                if plan_id.tier().is_none() {
                    tracing::debug!(viewer = %viewer, plan_id = %plan_id, "Viewer plan is outside the catalog");
                }
                CurrentPlan::new(plan_id, PlanSource::Stored)
            }
            Ok(Ok(None)) => CurrentPlan::free(PlanSource::NoRecord),
            Ok(Err(e)) => {
                tracing::warn!(viewer = %viewer, error = %e, "Error fetching plan, defaulting to free");
                CurrentPlan::free(PlanSource::Fallback)
            }
            Err(_) => {
                tracing::warn!(
                    viewer = %viewer,
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "Plan lookup timed out, defaulting to free"
                );
                CurrentPlan::free(PlanSource::Fallback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    enum Behavior {
        Plan(Option<&'static str>),
        Fail,
        Hang,
    }

    struct MockPlanReader {
        behavior: Behavior,
    }

    impl MockPlanReader {
        fn returning(plan: Option<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                behavior: Behavior::Plan(plan),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                behavior: Behavior::Fail,
            })
        }

        fn hanging() -> Arc<Self> {
            Arc::new(Self {
                behavior: Behavior::Hang,
            })
        }
    }

    #[async_trait]
    impl PlanReader for MockPlanReader {
        async fn get_plan_id(&self, _user_id: &UserId) -> Result<Option<String>, DomainError> {
            match self.behavior {
                Behavior::Plan(plan) => Ok(plan.map(str::to_string)),
                Behavior::Fail => Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated read failure",
                )),
                Behavior::Hang => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn handler(reader: Arc<dyn PlanReader>) -> GetCurrentPlanHandler {
        GetCurrentPlanHandler::new(reader, Duration::from_secs(5))
    }

    fn signed_in() -> GetCurrentPlanQuery {
        GetCurrentPlanQuery {
            viewer: Some(UserId::new("viewer-1").unwrap()),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn anonymous_viewer_is_free() {
        let plan = handler(MockPlanReader::returning(Some("AGENCY")))
            .handle(GetCurrentPlanQuery { viewer: None })
            .await;
        assert_eq!(plan, CurrentPlan::free(PlanSource::Anonymous));
        assert_eq!(plan.display_name, "Free");
    }

    #[tokio::test]
    async fn stored_plan_is_normalized() {
        let plan = handler(MockPlanReader::returning(Some("basic")))
            .handle(signed_in())
            .await;
        assert_eq!(plan.plan_id.as_str(), "STARTER");
        assert_eq!(plan.display_name, "Starter");
        assert_eq!(plan.source, PlanSource::Stored);
    }

    #[tokio::test]
    async fn missing_record_is_free() {
        let plan = handler(MockPlanReader::returning(None)).handle(signed_in()).await;
        assert_eq!(plan, CurrentPlan::free(PlanSource::NoRecord));
    }

    #[tokio::test]
    async fn read_failure_falls_back_to_free() {
        let plan = handler(MockPlanReader::failing()).handle(signed_in()).await;
        assert_eq!(plan, CurrentPlan::free(PlanSource::Fallback));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_read_times_out_to_free() {
        let plan = handler(MockPlanReader::hanging()).handle(signed_in()).await;
        assert_eq!(plan, CurrentPlan::free(PlanSource::Fallback));
    }

    #[tokio::test]
    async fn unknown_stored_plan_is_kept() {
        let plan = handler(MockPlanReader::returning(Some("gold")))
            .handle(signed_in())
            .await;
        assert_eq!(plan.plan_id.as_str(), "GOLD");
        assert_eq!(plan.display_name, "Gold");
    }
}
