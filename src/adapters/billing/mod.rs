//! Billing adapters.
//!
//! Implements the `BillingGateway` port. Only a simulation exists; plan
//! changes and credit purchases are acknowledged without charging anyone.

mod simulated_gateway;

pub use simulated_gateway::{SimulatedBillingGateway, Submission};
