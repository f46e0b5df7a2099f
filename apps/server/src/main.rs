//! Swapwatch - swap admission service
//!
//! Ingests candidate swap events, suppresses duplicates against a shared
//! store, tags whale wallets, gates on sentiment score and forwards
//! surviving events to a downstream sink.

mod config;
mod http;

use clap::Parser;
use config::AppConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use swapwatch_alerts::WebhookForwarder;
use swapwatch_engine::{Deduplicator, SentimentGate, SwapPipeline, WalletActivityTracker};
use swapwatch_feeds::{BirdeyeSource, HuggingFaceClassifier};
use swapwatch_store::{RedisStore, Store};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

const WHALE_MIN_COUNT: i64 = 2;

/// Swapwatch CLI
#[derive(Parser, Debug)]
#[command(name = "swapwatch")]
#[command(about = "Swap event admission pipeline", long_about = None)]
struct Args {
    /// Bind port for the trigger endpoint
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Configuration error");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn Store> = match RedisStore::connect(&config.redis_url).await {
        Ok(store) => Arc::new(store),
        Err(err) => {
            error!(error = %err, "Failed to connect to store");
            std::process::exit(1);
        }
    };
    info!("Connected to store");

    let source = Arc::new(BirdeyeSource::new(
        &config.source_url,
        &config.source_api_key,
    ));
    let classifier = Arc::new(HuggingFaceClassifier::new(
        &config.classifier_url,
        &config.classifier_api_key,
    ));
    let forwarder = Arc::new(WebhookForwarder::new(&config.sink_url));

    let pipeline = SwapPipeline::new(
        source,
        Deduplicator::new(Arc::clone(&store), config.claim_ttl_secs),
        WalletActivityTracker::new(
            Arc::clone(&store),
            config.wallet_window_secs,
            WHALE_MIN_COUNT,
        ),
        SentimentGate::new(
            classifier,
            config.sentiment_threshold,
            config.classifier_failure_policy,
        ),
        forwarder,
        config.min_amount_usd,
    );

    let state = http::AppState {
        pipeline: Arc::new(pipeline),
    };
    let app = http::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!(%addr, "Listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, %addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}
