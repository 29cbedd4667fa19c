use super::state::State;
use crate::error::ChainError;
use std::collections::HashMap;

/// Represents an n-gram model over whitespace-separated words.
///
/// The `NGramModel` stores states for prefixes of `n-1` words
/// and allows probabilistic prediction of the next word
/// based on learned texts.
///
/// # Responsibilities
/// - Build the model from texts of any length
/// - Remember which prefixes open a text, so generation starts somewhere sensible
/// - Generate a word sequence bounded by a maximum number of words
/// - Merge with another model of the same order `n`
///
/// # Invariants
/// - `n` is always >= 1
/// - Each state in `states` corresponds to a unique prefix of `n-1` words
/// - Every key in `starts` is made of exactly `n-1` words
#[derive(Debug)]
pub(crate) struct NGramModel {
	/// The order of the model (prefix words + the predicted word)
	n: usize,

	/// Prefixes observed at the beginning of a text, weighted by occurrence
	starts: State,

	/// Mapping from a prefix (n-1 words joined by a space) to its state
	states: HashMap<String, State>,
}

impl NGramModel {
	/// Creates a new n-gram model of order `n`.
	///
	/// # Errors
	/// Returns an error if `n < 1`.
	pub(crate) fn new(n: usize) -> Result<Self, ChainError> {
		if n == 0 {
			return Err(ChainError::InvalidOrder(n));
		}
		Ok(Self { n, starts: State::new(""), states: HashMap::new() })
	}

	pub(crate) fn order(&self) -> usize {
		self.n
	}

	pub(crate) fn state_count(&self) -> usize {
		self.states.len()
	}

	/// Adds a text to the model and returns the number of words read.
	///
	/// # Notes
	/// - Words are split on Unicode whitespace and kept as-is (no case folding).
	/// - Texts shorter than the prefix size contribute nothing.
	pub(crate) fn add_text(&mut self, text: &str) -> usize {
		let words: Vec<&str> = text.split_whitespace().collect();
		let context = self.n - 1;
		if words.len() < context.max(1) {
			return words.len();
		}

		self.starts.add_transition(&words[..context].join(" "));

		for window in words.windows(self.n) {
			if let Some((next_word, prefix)) = window.split_last() {
				self.states
					.entry(prefix.join(" "))
					.or_insert_with_key(|key| State::new(key))
					.add_transition(next_word);
			}
		}

		words.len()
	}

	/// Generates up to `max_words` words joined by a single space.
	///
	/// Starts from a learned opening prefix and follows the chain until a
	/// prefix has no continuation. Returns an empty string if the model is
	/// empty or `max_words` is zero.
	pub(crate) fn generate(&self, max_words: usize) -> String {
		if max_words == 0 {
			return String::new();
		}

		let Some(start) = self.starts.predict() else {
			return String::new();
		};

		let mut words: Vec<&str> = start.split(' ').filter(|w| !w.is_empty()).collect();
		let context = self.n - 1;

		while words.len() < max_words {
			let key = words[words.len().saturating_sub(context)..].join(" ");
			match self.states.get(&key).and_then(|state| state.predict()) {
				Some(next_word) => words.push(next_word),
				None => break,
			}
		}

		words.truncate(max_words);
		words.join(" ")
	}

	/// Merges another n-gram model into this one.
	///
	/// Occurrence counts for matching prefixes and transitions are summed.
	///
	/// # Errors
	/// Returns an error if the model orders do not match.
	pub(crate) fn merge(&mut self, other: &Self) -> Result<(), ChainError> {
		if self.n != other.n {
			return Err(ChainError::OrderMismatch { expected: self.n, found: other.n });
		}

		self.starts.merge(&other.starts)?;

		for (key, state) in &other.states {
			if let Some(existing) = self.states.get_mut(key) {
				existing.merge(state)?;
			} else {
				self.states.insert(key.clone(), state.clone());
			}
		}

		Ok(())
	}
}
