use thiserror::Error;

/// Failures reported by the n-gram chain.
#[derive(Debug, Error)]
pub enum ChainError {
	#[error("ngram size must be at least 1, got {0}")]
	InvalidOrder(usize),

	#[error("ngram size mismatch: expected {expected}, got {found}")]
	OrderMismatch { expected: usize, found: usize },

	#[error("state key mismatch: expected '{expected}', got '{found}'")]
	KeyMismatch { expected: String, found: String },

	#[error("ngram chain lock poisoned")]
	Poisoned,
}
