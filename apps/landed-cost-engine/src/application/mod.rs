//! Application layer - Use cases orchestrating the domain through ports.

pub mod ports;
pub mod use_cases;
