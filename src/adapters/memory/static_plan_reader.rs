//! Fixed-plan reader for demos.
//!
//! Answers the same plan for every authenticated viewer, whatever the store
//! holds. Enabled explicitly through `plans.simulated_plan`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::PlanReader;

/// Reader that reports one configured plan for everybody.
#[derive(Debug, Clone)]
pub struct StaticPlanReader {
    plan_id: String,
}

impl StaticPlanReader {
    pub fn new(plan_id: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
        }
    }
}

#[async_trait]
impl PlanReader for StaticPlanReader {
    async fn get_plan_id(&self, _user_id: &UserId) -> Result<Option<String>, DomainError> {
        Ok(Some(self.plan_id.clone()))
    }
}
