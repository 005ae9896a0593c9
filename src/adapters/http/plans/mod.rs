//! HTTP adapter for plan endpoints.
//!
//! Exposes the plans page via REST API:
//! - `GET /api/plans` - Tier cards, credit packages and the viewer's plan
//! - `GET /api/plans/current` - The viewer's plan
//! - `POST /api/plans/change` - Start an upgrade or downgrade
//! - `POST /api/plans/credits` - Buy an add-on credit package

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{PlansApiError, PlansAppState};
pub use routes::{plans_router, plans_routes};
