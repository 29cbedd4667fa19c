//! Word-level n-gram text generation library.
//!
//! This crate provides a Markov chain over words that learns from
//! arbitrary text and generates new text from the accumulated statistics:
//! - Per-prefix transition counting (`State`, internal)
//! - Fixed-order n-gram aggregation (`NGramModel`, internal)
//! - A thread-safe chain shared across callers (`NGramChain`)
//!
//! Only the chain is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core n-gram models and generation logic.
pub mod model;

/// Error type shared by the models.
pub mod error;

pub use error::ChainError;
pub use model::chain::NGramChain;
