//! Swap event definitions.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A single on-chain swap, as delivered by the upstream source.
///
/// Immutable once received. Wire field names follow the upstream API
/// (`txSignature`, `userAddress`, `tokenSymbol`, `amountUsd`, `firstSwap`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapEvent {
    /// Transaction signature, unique per swap.
    #[serde(rename = "txSignature")]
    pub signature: String,
    /// Sender wallet address.
    #[serde(rename = "userAddress")]
    pub wallet: String,
    /// Token symbol (e.g., "SOL", "BONK").
    pub token_symbol: CompactString,
    /// Swap size in USD.
    pub amount_usd: f64,
    /// Whether this is the wallet's first swap of this token.
    #[serde(default)]
    pub first_swap: bool,
}

impl SwapEvent {
    /// Create a swap event without the first-swap marker.
    pub fn new(signature: &str, wallet: &str, token_symbol: &str, amount_usd: f64) -> Self {
        Self {
            signature: signature.to_string(),
            wallet: wallet.to_string(),
            token_symbol: CompactString::new(token_symbol),
            amount_usd,
            first_swap: false,
        }
    }

    /// Mark this as the wallet's first swap of the token.
    pub fn with_first_swap(mut self, first_swap: bool) -> Self {
        self.first_swap = first_swap;
        self
    }
}
