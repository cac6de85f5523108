//! Domain models for the cloud-cost analytics API.
//!
//! All four datasets are plain serde types mirroring the wire format
//! exactly; the store hands them out and replaces them wholesale, so
//! there are no separate input/output shapes.

mod costs;
mod estimate;
mod resources;
mod usage;

pub use costs::*;
pub use estimate::*;
pub use resources::*;
pub use usage::*;

use serde::{Deserialize, Serialize};

/// Notification pushed to every connected WebSocket listener after a
/// dataset is replaced. Serializes as `{"type": "...", "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum UpdateMessage {
    CloudCosts(Vec<CostPoint>),
    ServiceUsage(UsageSeries),
}

/// Acknowledgement body returned by the update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAck {
    pub message: String,
}
