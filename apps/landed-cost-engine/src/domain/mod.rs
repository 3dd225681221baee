//! Domain layer - Core business logic with no I/O dependencies.

pub mod fees;
pub mod shared;
pub mod shipping;
