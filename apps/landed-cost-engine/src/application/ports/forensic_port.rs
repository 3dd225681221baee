//! Forensic Sink Port (Driven Port)
//!
//! Interface for recording carrier responses that could not be classified,
//! so they can be inspected offline.

use async_trait::async_trait;

use crate::domain::shared::ItemId;

/// Context attached to a recorded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForensicContext {
    /// The item whose lookup produced the payload.
    pub item_id: ItemId,
    /// Units requested in the lookup.
    pub quantity: u32,
    /// Whether the lookup ran under an automated credential.
    pub automated: bool,
}

/// Port for recording unclassified carrier responses.
///
/// Recording must never fail the shipping resolution, so the operation is
/// infallible from the caller's point of view.
#[async_trait]
pub trait ForensicSinkPort: Send + Sync {
    /// Record a raw response payload with its lookup context.
    async fn record(&self, payload: serde_json::Value, context: ForensicContext);
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpForensicSink;

#[async_trait]
impl ForensicSinkPort for NoOpForensicSink {
    async fn record(&self, _payload: serde_json::Value, _context: ForensicContext) {}
}
