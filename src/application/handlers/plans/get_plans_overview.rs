//! GetPlansOverviewHandler - Query handler for everything the plans page shows.

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::plans::{
    can_purchase_credits, CreditPackage, PlanBoard, PlanCard, PlanCatalog, TierVisibility,
};

use super::{CurrentPlan, GetCurrentPlanHandler, GetCurrentPlanQuery};

/// Query for the plans page content.
#[derive(Debug, Clone)]
pub struct GetPlansOverviewQuery {
    pub viewer: Option<UserId>,
}

/// Tier cards, credit packages and the viewer's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlansOverview {
    pub current_plan: CurrentPlan,
    pub cards: Vec<PlanCard>,
    pub credit_packages: &'static [CreditPackage],
    pub can_purchase_credits: bool,
}

impl PlansOverview {
    /// Builds the overview for an already resolved plan.
    pub fn for_plan(current_plan: CurrentPlan, visibility: TierVisibility) -> Self {
        Self {
            cards: PlanBoard::for_plan(&current_plan.plan_id, visibility),
            credit_packages: PlanCatalog::credit_packages(),
            can_purchase_credits: can_purchase_credits(&current_plan.plan_id),
            current_plan,
        }
    }
}

/// Handler for the plans page content.
#[derive(Clone)]
pub struct GetPlansOverviewHandler {
    current_plan: GetCurrentPlanHandler,
    visibility: TierVisibility,
}

impl GetPlansOverviewHandler {
    pub fn new(current_plan: GetCurrentPlanHandler, visibility: TierVisibility) -> Self {
        Self {
            current_plan,
            visibility,
        }
    }

    pub async fn handle(&self, query: GetPlansOverviewQuery) -> PlansOverview {
        let current = self
            .current_plan
            .handle(GetCurrentPlanQuery {
                viewer: query.viewer,
            })
            .await;
        PlansOverview::for_plan(current, self.visibility)
    }
}
