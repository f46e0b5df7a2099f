//! Alert assembly and delivery to the downstream sink.

pub mod forwarder;
pub mod payload;

pub use forwarder::{ForwardError, Forwarder, WebhookForwarder};
pub use payload::build_alert;
