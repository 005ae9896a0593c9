//! Adapters - Implementations of port interfaces.
//!
//! - `billing` - Simulated billing gateway
//! - `http` - REST API
//! - `memory` - In-process plan readers
//! - `postgres` - Profile plan reads from PostgreSQL

pub mod billing;
pub mod http;
pub mod memory;
pub mod postgres;

pub use billing::SimulatedBillingGateway;
pub use memory::{InMemoryPlanReader, StaticPlanReader};
pub use postgres::PostgresPlanReader;
