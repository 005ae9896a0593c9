//! HTTP adapters - REST API implementations.
//!
//! - `plans` - Plan listing, plan changes and credit purchases
//! - `viewer` - Viewer identity from the `X-User-Id` header
//! - `app` - Full router with the tower-http layers

pub mod app;
pub mod plans;
pub mod viewer;

// Re-export key types for convenience
pub use app::create_app;
pub use plans::{plans_router, PlansAppState};
pub use viewer::{Viewer, USER_ID_HEADER};
