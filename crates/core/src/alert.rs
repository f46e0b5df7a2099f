//! Outbound alert payload.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Alert handed to the forwarder, shaped as the downstream sink expects.
///
/// Wire names (`volumen`, `comentario`) follow the sink contract. Constructed
/// once per accepted event and immutable from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPayload {
    /// Token symbol of the admitted swap.
    pub token: CompactString,
    /// Swap size in USD.
    #[serde(rename = "volumen")]
    pub volume_usd: f64,
    /// Sentiment confidence score the event was admitted with.
    pub score: f64,
    /// Ordered tags: base tag first, then derived tags.
    pub tags: Vec<String>,
    /// Human-readable description. Carries no decision logic.
    #[serde(rename = "comentario")]
    pub comment: String,
}
