//! Reference-data adapters.

pub mod in_memory;

pub use in_memory::{InMemoryFeeRuleRepository, InMemoryWarehouseRepository};
