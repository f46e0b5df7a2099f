//! Core data types for the swap admission pipeline.

pub mod alert;
pub mod outcome;
pub mod sentiment;
pub mod swap;

pub use alert::*;
pub use outcome::*;
pub use sentiment::*;
pub use swap::*;
