use std::collections::HashMap;

use rand::Rng;

use crate::error::ChainError;

/// Represents a state in a word-level n-gram chain.
///
/// A `State` corresponds to a fixed (n-1)-word prefix (`key`) and stores
/// all observed transitions from this prefix to the next word.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
#[derive(Clone, Debug)]
pub(crate) struct State {
	/// Identifier of the state (n-1 words joined by a single space).
	key: String,
	/// Outgoing transitions indexed by the next word.
	/// Example: { "cat" => 42, "dog" => 3 }
	transitions: HashMap<String, usize>
}

impl State {
	/// Creates a new empty state for the given prefix.
	pub(crate) fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: HashMap::new(),
		}
	}

	/// Records one more occurrence of a transition toward `next_word`.
	pub(crate) fn add_transition(&mut self, next_word: &str) {
		if let Some(occurrence) = self.transitions.get_mut(next_word) {
			*occurrence += 1;
		} else {
			self.transitions.insert(next_word.to_owned(), 1);
		}
	}

	/// Predicts the next word using weighted random sampling.
	///
	/// The probability of selecting a word is proportional to its
	/// occurrence count. Returns `None` if the state has no transitions.
	pub(crate) fn predict(&self) -> Option<&str> {
		let total: usize = self.transitions.values().sum();
		if total == 0 {
			return None;
		}

		let mut r = rand::rng().random_range(0..total);

		let mut fallback: Option<&str> = None;
		for (next_word, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(next_word.as_str());
			}
			r -= occurrence;
			fallback = Some(next_word.as_str());
		}

		fallback
	}

	/// Merges another state into this one, summing occurrence counts.
	///
	/// # Errors
	/// Returns an error if the state keys do not match.
	pub(crate) fn merge(&mut self, other: &Self) -> Result<(), ChainError> {
		if self.key != other.key {
			return Err(ChainError::KeyMismatch {
				expected: self.key.clone(),
				found: other.key.clone(),
			});
		}

		for (next_word, occurrence) in &other.transitions {
			*self.transitions.entry(next_word.clone()).or_insert(0) += *occurrence;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_state_predicts_nothing() {
		let state = State::new("the");
		assert_eq!(state.predict(), None);
	}

	#[test]
	fn single_transition_is_always_predicted() {
		let mut state = State::new("the");
		state.add_transition("cat");
		state.add_transition("cat");

		for _ in 0..20 {
			assert_eq!(state.predict(), Some("cat"));
		}
	}

	#[test]
	fn predictions_stay_within_observed_transitions() {
		let mut state = State::new("the");
		state.add_transition("cat");
		state.add_transition("dog");
		state.add_transition("dog");

		for _ in 0..50 {
			let word = state.predict();
			assert!(matches!(word, Some("cat") | Some("dog")), "unexpected {word:?}");
		}
	}

	#[test]
	fn merge_sums_occurrences() {
		let mut left = State::new("the");
		left.add_transition("cat");

		let mut right = State::new("the");
		right.add_transition("cat");
		right.add_transition("dog");

		left.merge(&right).unwrap();

		assert_eq!(left.transitions.get("cat"), Some(&2));
		assert_eq!(left.transitions.get("dog"), Some(&1));
	}

	#[test]
	fn merge_rejects_other_key() {
		let mut left = State::new("the");
		let right = State::new("a");

		let err = left.merge(&right).unwrap_err();
		assert!(matches!(err, ChainError::KeyMismatch { .. }));
	}
}
