//! External data collaborators: the upstream swap source and the sentiment
//! classifier, plus candidate selection over fetched batches.

pub mod classify;
pub mod error;
pub mod selection;
pub mod source;

pub use classify::{Classifier, HuggingFaceClassifier, DEFAULT_MODEL_URL};
pub use error::{ClassifyError, FeedError};
pub use selection::select_candidate;
pub use source::{BirdeyeSource, SwapSource};
