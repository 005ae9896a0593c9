//! In-process adapters for development and tests.
//!
//! - `InMemoryPlanReader` - Plan records held in a map
//! - `StaticPlanReader` - One configured plan for every viewer

mod in_memory_plan_reader;
mod static_plan_reader;

pub use in_memory_plan_reader::InMemoryPlanReader;
pub use static_plan_reader::StaticPlanReader;
