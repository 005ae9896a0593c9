//! PostgreSQL adapters.

mod plan_reader;

pub use plan_reader::PostgresPlanReader;
