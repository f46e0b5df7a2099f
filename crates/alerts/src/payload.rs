//! Alert payload assembly.

use swapwatch_core::{AlertPayload, SentimentResult, SwapEvent, TriggerMode};

/// Base tag present on every alert, always first.
pub const BASE_TAG: &str = "#Solana";
/// Added when the sender wallet qualifies as a whale.
pub const WHALE_TAG: &str = "#whale";
/// Added when the event is the wallet's first swap of the token.
pub const NEW_TOKEN_TAG: &str = "#newToken";

/// Assemble the outbound alert. Pure function; tag order is fixed (base,
/// whale, new-token) and the comment is descriptive only.
pub fn build_alert(
    event: &SwapEvent,
    whale: bool,
    sentiment: &SentimentResult,
    mode: TriggerMode,
) -> AlertPayload {
    let mut tags = vec![BASE_TAG.to_string()];
    if whale {
        tags.push(WHALE_TAG.to_string());
    }
    if event.first_swap {
        tags.push(NEW_TOKEN_TAG.to_string());
    }

    let comment = match mode {
        TriggerMode::Direct => format!("Manual dispatch for {}", event.token_symbol),
        TriggerMode::Discovered => format!(
            "Swap of ${:.2} in {} by {}",
            event.amount_usd, event.token_symbol, event.wallet
        ),
    };

    AlertPayload {
        token: event.token_symbol.clone(),
        volume_usd: event.amount_usd,
        score: sentiment.score,
        tags,
        comment,
    }
}
