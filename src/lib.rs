//! Plan Ladder - Subscription plan catalog and upgrade flow
//!
//! Shows the tier catalog relative to the viewer's current plan, resolves
//! each tier to upgrade, downgrade or current, and gates add-on credit
//! purchases behind a paid plan. Billing is simulated.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
