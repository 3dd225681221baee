//! Infrastructure layer - Adapters implementing the application's ports.

pub mod cache;
pub mod carrier;
pub mod reference;
