//! Top-level module for the n-gram generation system.
//!
//! - Fixed-order word n-gram model (`NGramModel`)
//! - Internal state management (`State`)
//! - A lock-guarded chain safe to share between threads (`NGramChain`)

/// Thread-safe n-gram chain.
///
/// Learning merges a privately built model under a write lock,
/// generation samples under a read lock.
pub mod chain;

/// Fixed-order n-gram model (`n >= 1`).
///
/// Handles text ingestion, transition counting,
/// weighted next-word prediction, and model merging.
mod ngram_model;

/// Internal representation of a single n-gram state (prefix).
///
/// Tracks outgoing transitions and supports weighted random sampling.
/// This module is not exposed publicly.
mod state;
