use std::collections::HashMap;

use rand::prelude::IndexedRandom;

use serde::{Deserialize, Serialize};

use super::phonology_model::WordClass;

/// Per-session vocabulary, keyed by word class.
///
/// # Responsibilities
/// - Record generated words in insertion order (append-only, no dedup)
/// - Sample uniformly from a class for morphology and sentence building
/// - Report per-class counts for the showcase
///
/// ## Invariants
/// - Word lists only grow during a session; there is no clear operation,
///   the store is dropped with the session
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VocabularyStore {
	words: HashMap<WordClass, Vec<String>>,
}

impl VocabularyStore {
	/// Returns an empty store.
	pub fn default() -> Self {
		Self { words: HashMap::new() }
	}

	/// Appends a word to its class list.
	///
	/// Duplicates are kept; sampling weight follows recording frequency.
	pub fn record(&mut self, word_class: WordClass, word: String) {
		self.words.entry(word_class).or_default().push(word);
	}

	/// Returns a uniformly random word of the given class.
	///
	/// # Errors
	/// Returns an error if no word of this class has been recorded yet.
	/// Callers that cannot tolerate this seed fallback words first.
	pub fn sample(&self, word_class: WordClass) -> Result<String, String> {
		self.words
			.get(&word_class)
			.and_then(|words| words.choose(&mut rand::rng()))
			.cloned()
			.ok_or_else(|| format!("No words recorded for word class '{}'", word_class))
	}

	/// Returns the words recorded for a class, in insertion order.
	pub fn get_words(&self, word_class: WordClass) -> &[String] {
		self.words.get(&word_class).map(Vec::as_slice).unwrap_or_default()
	}

	/// Returns how many words a class holds.
	pub fn count(&self, word_class: WordClass) -> usize {
		self.get_words(word_class).len()
	}

	/// Returns `(class, count)` pairs for populated classes, in class order.
	pub fn counts(&self) -> Vec<(WordClass, usize)> {
		WordClass::ALL
			.iter()
			.map(|class| (*class, self.count(*class)))
			.filter(|(_, count)| *count > 0)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn recorded_words_keep_insertion_order() {
		let mut store = VocabularyStore::default();
		store.record(WordClass::Noun, "neko".to_owned());
		store.record(WordClass::Noun, "sakana".to_owned());
		store.record(WordClass::Noun, "neko".to_owned());

		assert_eq!(store.get_words(WordClass::Noun), ["neko", "sakana", "neko"]);
		assert_eq!(store.count(WordClass::Noun), 3);
	}

	#[test]
	fn sample_returns_a_recorded_word() {
		let mut store = VocabularyStore::default();
		store.record(WordClass::Verb, "miru".to_owned());
		store.record(WordClass::Verb, "taberu".to_owned());

		for _ in 0..20 {
			let word = store.sample(WordClass::Verb).unwrap();
			assert!(word == "miru" || word == "taberu");
		}
	}

	#[test]
	fn sampling_an_empty_class_fails() {
		let store = VocabularyStore::default();
		assert!(store.sample(WordClass::Adjective).is_err());
	}

	#[test]
	fn counts_skip_empty_classes() {
		let mut store = VocabularyStore::default();
		assert!(store.counts().is_empty());

		store.record(WordClass::Noun, "neko".to_owned());
		store.record(WordClass::Verb, "miru".to_owned());
		store.record(WordClass::Noun, "umi".to_owned());

		assert_eq!(store.counts(), vec![(WordClass::Noun, 2), (WordClass::Verb, 1)]);
	}
}
