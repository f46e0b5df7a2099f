//! Application configuration.
//!
//! All values come from the environment, validated once at startup into an
//! explicit structure. Nothing downstream reads the environment.

use std::fmt::Display;
use std::str::FromStr;
use swapwatch_engine::ClassifierFailurePolicy;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Validated configuration, passed by reference into the pipeline wiring.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shared store location.
    pub redis_url: String,
    /// Downstream sink URL.
    pub sink_url: String,
    /// Classifier inference endpoint.
    pub classifier_url: String,
    /// Classifier credential.
    pub classifier_api_key: String,
    /// Upstream swap source base URL.
    pub source_url: String,
    /// Upstream swap source credential.
    pub source_api_key: String,
    /// Minimum USD amount for discovered-mode selection.
    pub min_amount_usd: f64,
    /// Dedup claim lifetime.
    pub claim_ttl_secs: u64,
    /// Wallet activity window.
    pub wallet_window_secs: u64,
    /// Admission threshold; exactly this score passes.
    pub sentiment_threshold: f64,
    /// What to do when the classifier call fails.
    pub classifier_failure_policy: ClassifierFailurePolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let sentiment_threshold = parsed("SENTIMENT_THRESHOLD", 0.7)?;
        if !(0.0..=1.0).contains(&sentiment_threshold) {
            return Err(ConfigError::Invalid(
                "SENTIMENT_THRESHOLD",
                format!("{sentiment_threshold} outside [0.0, 1.0]"),
            ));
        }

        Ok(Self {
            redis_url: require("REDIS_URL")?,
            sink_url: require("SINK_URL")?,
            classifier_url: optional("CLASSIFIER_URL")
                .unwrap_or_else(|| swapwatch_feeds::DEFAULT_MODEL_URL.to_string()),
            classifier_api_key: require("CLASSIFIER_API_KEY")?,
            source_url: require("SOURCE_URL")?,
            source_api_key: require("SOURCE_API_KEY")?,
            min_amount_usd: parsed("MIN_AMOUNT_USD", 5000.0)?,
            claim_ttl_secs: parsed("CLAIM_TTL_SECS", 86_400)?,
            wallet_window_secs: parsed("WALLET_WINDOW_SECS", 3_600)?,
            sentiment_threshold,
            classifier_failure_policy: parsed(
                "CLASSIFIER_FAILURE_POLICY",
                ClassifierFailurePolicy::Fail,
            )?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn optional(name: &'static str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::Invalid(name, e.to_string())),
        None => Ok(default),
    }
}
