//! Plans domain module.
//!
//! Tier catalog, plan identifier normalization, ranking and the rules
//! that decide which actions a viewer is offered.
//!
//! # Module Structure
//!
//! - `tier` - PlanTier subscription levels
//! - `plan_id` - Canonical identifiers and legacy aliases
//! - `rank` - PlanRank total order
//! - `action` - Upgrade/downgrade/current resolution
//! - `eligibility` - Add-on credit purchase gate
//! - `catalog` - Static tier and credit package table
//! - `board` - Tier cards per viewer, visibility policy

mod action;
mod board;
mod catalog;
mod eligibility;
mod errors;
mod plan_id;
mod rank;
mod tier;

pub use action::{ChangeDirection, PlanAction};
pub use board::{PlanBoard, PlanCard, TierVisibility};
pub use catalog::{CreditPackage, PlanCatalog, PlanCatalogEntry};
pub use eligibility::can_purchase_credits;
pub use errors::PlanError;
pub use plan_id::PlanId;
pub use rank::PlanRank;
pub use tier::PlanTier;
