//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! `PlansPage` ties them into one viewer session.

pub mod handlers;
mod plans_page;
mod settings;

pub use handlers::{
    CreditPurchaseOutcome, CurrentPlan, GetCurrentPlanHandler, GetCurrentPlanQuery,
    GetPlansOverviewHandler, GetPlansOverviewQuery, PlanChangeResult, PlanSource, PlansOverview,
    PurchaseCreditsCommand, PurchaseCreditsHandler, PurchaseCreditsResult,
    RequestPlanChangeCommand, RequestPlanChangeHandler,
};
pub use plans_page::{PlansPage, PlansPageDeps, PlansPageSnapshot};
pub use settings::PlansSettings;
