//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `plans` - Tier catalog, identifier normalization, ranking, eligibility
//! - `notification` - Transient viewer notifications

pub mod foundation;
pub mod notification;
pub mod plans;
