use std::sync::{PoisonError, RwLock};

use super::ngram_model::NGramModel;
use crate::error::ChainError;

/// A word-level n-gram chain that can be shared between threads.
///
/// Every call to [`NGramChain::learn`] builds a private model from the given
/// text, then merges it into the shared one while holding the write lock.
/// Concurrent [`NGramChain::generate`] calls take the read lock and therefore
/// only ever observe fully merged texts.
///
/// Learned statistics accumulate for the lifetime of the chain.
#[derive(Debug)]
pub struct NGramChain {
	order: usize,
	model: RwLock<NGramModel>,
}

impl NGramChain {
	/// Creates an empty chain where `n - 1` words predict the next one.
	///
	/// # Errors
	/// Returns [`ChainError::InvalidOrder`] if `n` is zero.
	pub fn new(n: usize) -> Result<Self, ChainError> {
		let model = NGramModel::new(n)?;
		Ok(Self { order: model.order(), model: RwLock::new(model) })
	}

	/// Returns the ngram size of the chain.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct prefixes learned so far.
	pub fn state_count(&self) -> usize {
		self.model.read().unwrap_or_else(PoisonError::into_inner).state_count()
	}

	/// Absorbs `text` into the chain.
	///
	/// # Errors
	/// Returns [`ChainError::Poisoned`] if a previous writer panicked.
	pub fn learn(&self, text: &str) -> Result<(), ChainError> {
		let mut partial = NGramModel::new(self.order)?;
		let words = partial.add_text(text);

		let mut model = self.model.write().map_err(|_| ChainError::Poisoned)?;
		model.merge(&partial)?;

		tracing::debug!(words, states = model.state_count(), "learned text");
		Ok(())
	}

	/// Generates at most `max_words` words from everything learned so far.
	///
	/// Never fails: an empty chain yields an empty string.
	pub fn generate(&self, max_words: usize) -> String {
		self.model.read().unwrap_or_else(PoisonError::into_inner).generate(max_words)
	}
}
