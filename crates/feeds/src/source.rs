//! Upstream swap source.

use async_trait::async_trait;
use serde::Deserialize;
use swapwatch_core::SwapEvent;
use tracing::debug;

use crate::error::FeedError;

/// Provider of recent swap batches.
#[async_trait]
pub trait SwapSource: Send + Sync {
    /// Fetch the most recent swaps. Records without a usable USD amount are
    /// already dropped; every returned event has a finite, non-negative
    /// `amount_usd`.
    async fn fetch_recent(&self) -> Result<Vec<SwapEvent>, FeedError>;
}

/// Swap record as it arrives on the wire; the amount may be absent or junk.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSwap {
    #[serde(rename = "txSignature")]
    signature: String,
    #[serde(rename = "userAddress")]
    wallet: String,
    token_symbol: String,
    #[serde(default)]
    amount_usd: Option<f64>,
    #[serde(default)]
    first_swap: bool,
}

#[derive(Debug, Deserialize)]
struct SourceResponse {
    data: SourceData,
}

#[derive(Debug, Deserialize)]
struct SourceData {
    items: Vec<RawSwap>,
}

/// REST client for the Birdeye recent-transactions API.
pub struct BirdeyeSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BirdeyeSource {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl SwapSource for BirdeyeSource {
    async fn fetch_recent(&self) -> Result<Vec<SwapEvent>, FeedError> {
        let url = format!("{}/defi/txs/recent", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body: SourceResponse = response
            .json()
            .await
            .map_err(|e| FeedError::ParseError(e.to_string()))?;

        Ok(usable_events(body.data.items))
    }
}

/// Convert raw records to events, dropping anything without a finite,
/// non-negative amount. Such records are never eligible for selection.
fn usable_events(items: Vec<RawSwap>) -> Vec<SwapEvent> {
    let total = items.len();
    let events: Vec<SwapEvent> = items
        .into_iter()
        .filter_map(|raw| {
            let amount_usd = raw.amount_usd?;
            if !amount_usd.is_finite() || amount_usd < 0.0 {
                return None;
            }
            Some(
                SwapEvent::new(&raw.signature, &raw.wallet, &raw.token_symbol, amount_usd)
                    .with_first_swap(raw.first_swap),
            )
        })
        .collect();

    if events.len() < total {
        debug!(
            dropped = total - events.len(),
            total, "Dropped records without a usable amount"
        );
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(signature: &str, amount_usd: Option<f64>) -> RawSwap {
        RawSwap {
            signature: signature.to_string(),
            wallet: "wallet".to_string(),
            token_symbol: "SOL".to_string(),
            amount_usd,
            first_swap: false,
        }
    }

    #[test]
    fn test_usable_events_keeps_valid_amounts() {
        let events = usable_events(vec![raw("a", Some(100.0)), raw("b", Some(0.0))]);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].signature, "a");
        assert_eq!(events[1].amount_usd, 0.0);
    }

    #[test]
    fn test_usable_events_drops_missing_amount() {
        let events = usable_events(vec![raw("a", None), raw("b", Some(50.0))]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].signature, "b");
    }

    #[test]
    fn test_usable_events_drops_negative_and_non_finite() {
        let events = usable_events(vec![
            raw("a", Some(-1.0)),
            raw("b", Some(f64::NAN)),
            raw("c", Some(f64::INFINITY)),
        ]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_source_response_parsing() {
        let json = r#"{
            "data": {
                "items": [
                    {"txSignature": "s1", "userAddress": "w1", "tokenSymbol": "WIF", "amountUsd": 6000.0},
                    {"txSignature": "s2", "userAddress": "w2", "tokenSymbol": "BONK"}
                ]
            }
        }"#;

        let parsed: SourceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.items.len(), 2);
        assert_eq!(parsed.data.items[1].amount_usd, None);

        let events = usable_events(parsed.data.items);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].token_symbol, "WIF");
    }
}
