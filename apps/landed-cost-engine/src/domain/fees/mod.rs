//! Fee Computation Context
//!
//! Warehouse tax lookup and per-attribute fee rules with layered defaults.

pub mod resolver;
pub mod rule;
pub mod warehouse;

pub use resolver::{FeeError, FeeResolver, FeeResult};
pub use rule::{FeeKind, FeeRule, FeeRuleRepository};
pub use warehouse::{Warehouse, WarehouseRepository};
