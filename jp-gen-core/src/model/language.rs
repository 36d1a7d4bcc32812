use rand::prelude::IndexedRandom;

use super::morphology_model::{AffixKind, MorphologyModel};
use super::phonology_model::{PhonologyModel, WordClass};
use super::syntax_model::{ParticleRole, SyntaxModel};
use super::vocabulary_store::VocabularyStore;

/// Class sequence of one vocabulary batch.
const VOCABULARY_BATCH: [WordClass; 5] = [
	WordClass::Noun,
	WordClass::Verb,
	WordClass::Noun,
	WordClass::Adjective,
	WordClass::Noun,
];

/// Rule applied per class in the morphology showcase.
const MORPHOLOGY_SHOWCASE: [(WordClass, &str); 3] = [
	(WordClass::Noun, "plural"),
	(WordClass::Verb, "past"),
	(WordClass::Adjective, "negative"),
];

/// Nouns seeded when sentence generation finds the class empty.
const FALLBACK_NOUNS: usize = 3;
/// Verbs seeded when sentence generation finds the class empty.
const FALLBACK_VERBS: usize = 2;
/// Syllables per fallback word and per ad-hoc adverb.
const FALLBACK_SYLLABLES: usize = 2;

/// Sentences shown in the final showcase.
const SHOWCASE_SENTENCES: usize = 3;

/// Shape of one generated sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SentencePattern {
	SubjectVerb,
	SubjectObjectVerb,
	SubjectObjectVerbAdverb,
}

/// Patterns drawn uniformly per sentence.
const SENTENCE_PATTERNS: [SentencePattern; 3] = [
	SentencePattern::SubjectVerb,
	SentencePattern::SubjectObjectVerb,
	SentencePattern::SubjectObjectVerbAdverb,
];

impl SentencePattern {
	fn has_object(&self) -> bool {
		!matches!(self, SentencePattern::SubjectVerb)
	}

	fn has_adverb(&self) -> bool {
		matches!(self, SentencePattern::SubjectObjectVerbAdverb)
	}
}

/// One before/after pair from the morphology showcase.
#[derive(Clone, Debug)]
pub struct MorphologyExample {
	/// Class the base word was sampled from.
	pub word_class: WordClass,
	/// Name of the applied rule.
	pub rule_name: String,
	/// The word as sampled from the vocabulary.
	pub base: String,
	/// The word after rule application.
	pub derived: String,
}

/// High-level session interface over the language models.
///
/// # Responsibilities
/// - Own the phonology, morphology, and syntax models plus the session's
///   vocabulary store
/// - Drive the frontend-facing operations: vocabulary batches, morphology
///   showcases, sentence generation, and the full-language showcase
///
/// A `Language` lives as long as the application session; dropping it is
/// the only way the vocabulary is cleared.
#[derive(Debug)]
pub struct Language {
	phonology: PhonologyModel,
	morphology: MorphologyModel,
	syntax: SyntaxModel,
	vocabulary: VocabularyStore,
}

impl Language {
	/// Creates a session with the default models and rule set.
	///
	/// Installs the three stock rules: plural (suffix "tachi"),
	/// past (suffix "ta"), and negative (prefix "fu").
	pub fn new() -> Self {
		let mut morphology = MorphologyModel::default();
		morphology.add_rule("plural", AffixKind::Suffix, "tachi", "plural");
		morphology.add_rule("past", AffixKind::Suffix, "ta", "past tense");
		morphology.add_rule("negative", AffixKind::Prefix, "fu", "negation");

		Self {
			phonology: PhonologyModel::default(),
			morphology,
			syntax: SyntaxModel::default(),
			vocabulary: VocabularyStore::default(),
		}
	}

	/// Returns the phonology model, for frontend info panels.
	pub fn get_phonology(&self) -> &PhonologyModel {
		&self.phonology
	}

	/// Returns the morphology model, for frontend rule panels.
	pub fn get_morphology(&self) -> &MorphologyModel {
		&self.morphology
	}

	/// Returns the syntax model.
	pub fn get_syntax(&self) -> &SyntaxModel {
		&self.syntax
	}

	/// Returns the session vocabulary.
	pub fn get_vocabulary(&self) -> &VocabularyStore {
		&self.vocabulary
	}

	/// Generates one batch of five words over the fixed class sequence.
	///
	/// # Behavior
	/// - Classes are requested in the order noun, verb, noun, adjective,
	///   noun.
	/// - Every word is recorded into the vocabulary store and returned with
	///   its class for display.
	pub fn generate_vocabulary(&mut self) -> Vec<(WordClass, String)> {
		VOCABULARY_BATCH
			.iter()
			.map(|class| {
				let word = self.phonology.generate_word(None, *class);
				self.vocabulary.record(*class, word.clone());
				(*class, word)
			})
			.collect()
	}

	/// Builds one before/after pair per populated word class.
	///
	/// # Behavior
	/// - Nouns get the plural rule, verbs the past rule, adjectives the
	///   negative rule.
	/// - Classes with no recorded vocabulary are skipped, not errors.
	pub fn show_morphology(&self) -> Vec<MorphologyExample> {
		let mut examples = Vec::new();
		for (class, rule_name) in MORPHOLOGY_SHOWCASE {
			let base = match self.vocabulary.sample(class) {
				Ok(word) => word,
				Err(_) => continue,
			};
			let derived = self.morphology.apply(&base, rule_name);
			examples.push(MorphologyExample {
				word_class: class,
				rule_name: rule_name.to_owned(),
				base,
				derived,
			});
		}
		examples
	}

	/// Seeds minimal vocabulary so sentence generation cannot sample an
	/// empty class.
	fn seed_fallback_vocabulary(&mut self) {
		if self.vocabulary.count(WordClass::Noun) == 0 {
			for _ in 0..FALLBACK_NOUNS {
				let word = self.phonology.generate_word(Some(FALLBACK_SYLLABLES), WordClass::Noun);
				self.vocabulary.record(WordClass::Noun, word);
			}
		}
		if self.vocabulary.count(WordClass::Verb) == 0 {
			for _ in 0..FALLBACK_VERBS {
				let word = self.phonology.generate_word(Some(FALLBACK_SYLLABLES), WordClass::Verb);
				self.vocabulary.record(WordClass::Verb, word);
			}
		}
	}

	/// Generates `count` sentences from the session vocabulary.
	///
	/// # Behavior
	/// - Seeds fallback nouns and verbs first when a class is empty.
	/// - Each sentence draws a pattern uniformly from subject+verb,
	///   subject+object+verb, and subject+object+verb+adverb.
	/// - Adverbs are synthesized on the spot and not recorded.
	///
	/// # Errors
	/// Returns an error if sampling fails; seeding makes this unreachable
	/// for the noun and verb classes.
	pub fn generate_sentences(&mut self, count: usize) -> Result<Vec<String>, String> {
		self.seed_fallback_vocabulary();

		let mut sentences = Vec::with_capacity(count);
		for _ in 0..count {
			// Should not panic, the pattern list is a non-empty constant
			let pattern = *SENTENCE_PATTERNS.choose(&mut rand::rng()).unwrap();

			let subject = self.vocabulary.sample(WordClass::Noun)?;
			let verb = self.vocabulary.sample(WordClass::Verb)?;
			let object = if pattern.has_object() {
				Some(self.vocabulary.sample(WordClass::Noun)?)
			} else {
				None
			};
			let adverb = if pattern.has_adverb() {
				Some(self.phonology.generate_word(Some(FALLBACK_SYLLABLES), WordClass::Noun))
			} else {
				None
			};

			sentences.push(self.syntax.generate_sentence(
				&subject,
				&verb,
				object.as_deref(),
				adverb.as_deref(),
			));
		}

		Ok(sentences)
	}

	/// Renders the full-language summary.
	///
	/// # Behavior
	/// - Dumps the phonology configuration (sorted inventories and syllable
	///   shapes), the morphology rules, the syntax word order and particle
	///   banks, the per-class vocabulary counts, and 3 sample sentences.
	/// - Sentence generation seeds fallback vocabulary if needed, so the
	///   sample section is never empty.
	pub fn final_showcase(&mut self) -> Result<String, String> {
		let mut consonants = self.phonology.get_consonants().clone();
		consonants.sort();
		let mut vowels = self.phonology.get_vowels().clone();
		vowels.sort();

		let mut out = String::new();
		out.push_str("==================================================\n");
		out.push_str("Language showcase\n");
		out.push_str("==================================================\n");

		out.push_str("\nPhonology:\n");
		out.push_str(&format!("   consonants: {}\n", consonants.join(", ")));
		out.push_str(&format!("   vowels: {}\n", vowels.join(", ")));
		out.push_str("   syllable shapes: CV, CVN (nasal coda)\n");

		out.push_str("\nMorphology:\n");
		for rule in self.morphology.rules() {
			out.push_str(&format!("   - {}: {} ({})\n", rule.meaning, rule.marker, rule.kind));
		}

		out.push_str("\nSyntax:\n");
		out.push_str(&format!("   word order: {}\n", self.syntax.get_word_order()));
		for role in ParticleRole::ALL {
			out.push_str(&format!(
				"   {} particles: {}\n",
				role,
				self.syntax.get_particles(role).join("/")
			));
		}

		out.push_str("\nVocabulary:\n");
		for (class, count) in self.vocabulary.counts() {
			out.push_str(&format!("   {}: {} words\n", class, count));
		}

		out.push_str("\nSample sentences:\n");
		for (i, sentence) in self.generate_sentences(SHOWCASE_SENTENCES)?.iter().enumerate() {
			out.push_str(&format!("   {}. {}\n", i + 1, sentence));
		}

		Ok(out)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_session_has_the_stock_rules_and_no_vocabulary() {
		let language = Language::new();
		assert_eq!(language.get_morphology().rule_count(), 3);
		assert_eq!(language.get_morphology().apply("neko", "plural"), "nekotachi");
		assert_eq!(language.get_morphology().apply("miru", "past"), "miruta");
		assert_eq!(language.get_morphology().apply("takai", "negative"), "futakai");
		assert!(language.get_vocabulary().counts().is_empty());
	}

	#[test]
	fn vocabulary_batch_records_five_words() {
		let mut language = Language::new();
		let batch = language.generate_vocabulary();
		assert_eq!(batch.len(), 5);
		for (_, word) in &batch {
			assert!(!word.is_empty());
		}

		let store = language.get_vocabulary();
		assert_eq!(store.count(WordClass::Noun), 3);
		assert_eq!(store.count(WordClass::Verb), 1);
		assert_eq!(store.count(WordClass::Adjective), 1);
	}

	#[test]
	fn morphology_showcase_is_empty_on_a_fresh_session() {
		let language = Language::new();
		assert!(language.show_morphology().is_empty());
	}

	#[test]
	fn morphology_showcase_covers_each_populated_class() {
		let mut language = Language::new();
		language.generate_vocabulary();

		let examples = language.show_morphology();
		assert_eq!(examples.len(), 3);

		for example in &examples {
			match example.word_class {
				WordClass::Noun => {
					assert_eq!(example.rule_name, "plural");
					assert_eq!(example.derived, format!("{}tachi", example.base));
				}
				WordClass::Verb => {
					assert_eq!(example.rule_name, "past");
					assert_eq!(example.derived, format!("{}ta", example.base));
				}
				WordClass::Adjective => {
					assert_eq!(example.rule_name, "negative");
					assert_eq!(example.derived, format!("fu{}", example.base));
				}
			}
		}
	}

	#[test]
	fn sentence_generation_seeds_fallback_vocabulary() {
		let mut language = Language::new();
		let sentences = language.generate_sentences(1).unwrap();
		assert_eq!(sentences.len(), 1);

		let store = language.get_vocabulary();
		assert_eq!(store.count(WordClass::Noun), 3);
		assert_eq!(store.count(WordClass::Verb), 2);
	}

	#[test]
	fn sentences_end_with_a_recorded_verb() {
		let mut language = Language::new();
		let sentences = language.generate_sentences(20).unwrap();

		let verbs = language.get_vocabulary().get_words(WordClass::Verb);
		for sentence in &sentences {
			assert!(sentence.ends_with('.'));
			let words: Vec<&str> = sentence.trim_end_matches('.').split(' ').collect();
			assert!(words.len() >= 2 && words.len() <= 4, "bad shape: {}", sentence);
			assert!(verbs.contains(&words.last().unwrap().to_string()), "verb not last: {}", sentence);
		}
	}

	#[test]
	fn existing_vocabulary_is_not_reseeded() {
		let mut language = Language::new();
		language.generate_vocabulary();
		let noun_count = language.get_vocabulary().count(WordClass::Noun);

		language.generate_sentences(2).unwrap();
		assert_eq!(language.get_vocabulary().count(WordClass::Noun), noun_count);
	}

	#[test]
	fn showcase_contains_every_section() {
		let mut language = Language::new();
		language.generate_vocabulary();
		let showcase = language.final_showcase().unwrap();

		assert!(showcase.contains("Phonology:"));
		assert!(showcase.contains("consonants: h, k, m, n, r, s, t, w, y"));
		assert!(showcase.contains("vowels: a, e, i, o, u"));
		assert!(showcase.contains("Morphology:"));
		assert!(showcase.contains("- plural: tachi (suffix)"));
		assert!(showcase.contains("- negation: fu (prefix)"));
		assert!(showcase.contains("word order: subject-object-verb"));
		assert!(showcase.contains("subject particles: wa/ga"));
		assert!(showcase.contains("Vocabulary:"));
		assert!(showcase.contains("Sample sentences:"));
		assert!(showcase.contains("   3. "));
		assert!(!showcase.contains("   4. "));
	}
}
