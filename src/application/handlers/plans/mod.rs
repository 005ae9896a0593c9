//! Plans handlers.
//!
//! Queries resolve the viewer's plan and what the page shows; commands start
//! plan changes and credit purchases through the billing gateway.

mod get_current_plan;
mod get_plans_overview;
mod purchase_credits;
mod request_plan_change;

pub use get_current_plan::{CurrentPlan, GetCurrentPlanHandler, GetCurrentPlanQuery, PlanSource};
pub use get_plans_overview::{GetPlansOverviewHandler, GetPlansOverviewQuery, PlansOverview};
pub use purchase_credits::{
    CreditPurchaseOutcome, PurchaseCreditsCommand, PurchaseCreditsHandler, PurchaseCreditsResult,
};
pub use request_plan_change::{PlanChangeResult, RequestPlanChangeCommand, RequestPlanChangeHandler};
