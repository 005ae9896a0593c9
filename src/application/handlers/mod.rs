//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod plans;

pub use plans::{
    // Queries
    CurrentPlan, GetCurrentPlanHandler, GetCurrentPlanQuery, GetPlansOverviewHandler,
    GetPlansOverviewQuery, PlanSource, PlansOverview,
    // Commands
    CreditPurchaseOutcome, PlanChangeResult, PurchaseCreditsCommand, PurchaseCreditsHandler,
    PurchaseCreditsResult, RequestPlanChangeCommand, RequestPlanChangeHandler,
};
