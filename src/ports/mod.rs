//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PlanReader` - Read of the viewer's persisted plan identifier
//! - `BillingGateway` - Submission of plan change and credit purchase commands

mod billing_gateway;
mod plan_reader;

pub use billing_gateway::{
    BillingCommand, BillingError, BillingGateway, BillingReceipt, BillingStatus,
};
pub use plan_reader::PlanReader;
