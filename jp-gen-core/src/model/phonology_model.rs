use std::cmp::max;
use std::fmt;

use rand::Rng;
use rand::prelude::IndexedRandom;

use serde::{Deserialize, Serialize};

/// Japanese-style consonant onsets.
const DEFAULT_CONSONANTS: &[&str] = &["k", "s", "t", "n", "h", "m", "y", "r", "w"];

/// The five vowels.
const DEFAULT_VOWELS: &[&str] = &["a", "i", "u", "e", "o"];

/// Nasal coda options; the empty option keeps the syllable open.
const DEFAULT_NASAL_CODAS: &[&str] = &["n", ""];

/// Probability of drawing a nasal coda after the vowel.
const NASAL_CODA_PROBABILITY: f32 = 0.3;

/// Suffix banks that finish a word of the matching class.
const VERB_SUFFIXES: &[&str] = &["ru", "mu", "su", "ku", "ta"];
const NOUN_SUFFIXES: &[&str] = &["ko", "mi", "ra", "to", "na"];

/// Grammatical class of a generated word.
///
/// The class drives two things: which suffix bank finishes the word, and
/// under which key the word is recorded in the vocabulary store. Only nouns
/// and verbs have a suffix bank; any other class leaves the word bare.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordClass {
	Noun,
	Verb,
	Adjective,
}

impl WordClass {
	/// All classes, in display order.
	pub const ALL: [WordClass; 3] = [WordClass::Noun, WordClass::Verb, WordClass::Adjective];

	/// Lowercase label used in displays and store dumps.
	pub fn label(&self) -> &'static str {
		match self {
			WordClass::Noun => "noun",
			WordClass::Verb => "verb",
			WordClass::Adjective => "adjective",
		}
	}
}

impl fmt::Display for WordClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Produces syllables and words from fixed phoneme inventories.
///
/// # Responsibilities
/// - Hold the consonant, vowel, and nasal-coda inventories
/// - Generate CV / CVN syllables
/// - Generate words as syllable runs finished by a class suffix
///
/// ## Invariants
/// - The consonant and vowel inventories are non-empty
/// - The inventories are fixed after construction
/// - Generated words are never empty
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhonologyModel {
	consonants: Vec<String>,
	vowels: Vec<String>,
	nasal_codas: Vec<String>,
}

impl PhonologyModel {
	/// Returns the default Japanese-style model.
	///
	/// Initializes:
	/// - consonants k, s, t, n, h, m, y, r, w
	/// - vowels a, i, u, e, o
	/// - nasal codas "n" and the empty string
	pub fn default() -> Self {
		// Should not panic, the default inventories are non-empty
		Self::new(DEFAULT_CONSONANTS, DEFAULT_VOWELS, DEFAULT_NASAL_CODAS).unwrap()
	}

	/// Creates a model from custom inventories.
	///
	/// # Parameters
	/// - `consonants`: Onset inventory, one entry per consonant.
	/// - `vowels`: Vowel inventory.
	/// - `nasal_codas`: Coda options; may contain the empty string, may be
	///   empty altogether (no codas are ever drawn then).
	///
	/// # Errors
	/// Returns an error if the consonant or vowel inventory is empty.
	pub fn new(consonants: &[&str], vowels: &[&str], nasal_codas: &[&str]) -> Result<Self, String> {
		if consonants.is_empty() {
			return Err("Consonant inventory must not be empty".to_owned());
		}
		if vowels.is_empty() {
			return Err("Vowel inventory must not be empty".to_owned());
		}
		Ok(Self {
			consonants: consonants.iter().map(|s| s.to_string()).collect(),
			vowels: vowels.iter().map(|s| s.to_string()).collect(),
			nasal_codas: nasal_codas.iter().map(|s| s.to_string()).collect(),
		})
	}

	/// Returns the consonant inventory.
	pub fn get_consonants(&self) -> &Vec<String> {
		&self.consonants
	}

	/// Returns the vowel inventory.
	pub fn get_vowels(&self) -> &Vec<String> {
		&self.vowels
	}

	/// Generates one Japanese-style syllable (CV or CVN).
	///
	/// # Behavior
	/// - Draws a random consonant and a random vowel.
	/// - With probability 0.3, appends one of the nasal coda options
	///   (one option is the empty string, which keeps the syllable CV).
	pub fn generate_syllable(&self) -> String {
		let mut rng = rand::rng();

		// Should not panic, inventories are validated non-empty at construction
		let consonant = self.consonants.choose(&mut rng).unwrap();
		let vowel = self.vowels.choose(&mut rng).unwrap();

		let mut syllable = format!("{}{}", consonant, vowel);
		if rng.random_range(0.0..1.0) < NASAL_CODA_PROBABILITY {
			if let Some(coda) = self.nasal_codas.choose(&mut rng) {
				syllable.push_str(coda);
			}
		}
		syllable
	}

	/// Generates a word of `syllable_count` syllables plus a class suffix.
	///
	/// # Parameters
	/// - `syllable_count`: Number of syllables; `None` draws a random count
	///   in [2, 3]. An explicit 0 is clamped to 1.
	/// - `word_class`: Class whose suffix bank finishes the word. Classes
	///   without a suffix bank (adjectives) leave the word bare.
	///
	/// # Notes
	/// - The returned word is never empty.
	pub fn generate_word(&self, syllable_count: Option<usize>, word_class: WordClass) -> String {
		let count = match syllable_count {
			Some(n) => max(n, 1),
			None => rand::rng().random_range(2..=3),
		};

		let mut word = String::new();
		for _ in 0..count {
			word.push_str(&self.generate_syllable());
		}

		let suffixes = match word_class {
			WordClass::Verb => VERB_SUFFIXES,
			WordClass::Noun => NOUN_SUFFIXES,
			_ => return word,
		};
		// Should not panic, the suffix banks are non-empty constants
		let suffix = suffixes.choose(&mut rand::rng()).unwrap();
		format!("{}{}", word, suffix)
	}
}
