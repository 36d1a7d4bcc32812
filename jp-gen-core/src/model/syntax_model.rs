use std::collections::HashMap;
use std::fmt;

use rand::prelude::IndexedRandom;

use serde::{Deserialize, Serialize};

/// Word-order tag of the default model.
const DEFAULT_WORD_ORDER: &str = "subject-object-verb";

/// Default particle banks per role.
const SUBJECT_PARTICLES: &[&str] = &["wa", "ga"];
const OBJECT_PARTICLES: &[&str] = &["wo"];
const DIRECTION_PARTICLES: &[&str] = &["e", "o"];

/// Grammatical role a particle can mark.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleRole {
	Subject,
	Object,
	Direction,
}

impl ParticleRole {
	/// All roles, in display order.
	pub const ALL: [ParticleRole; 3] =
		[ParticleRole::Subject, ParticleRole::Object, ParticleRole::Direction];

	/// Lowercase label used in displays.
	pub fn label(&self) -> &'static str {
		match self {
			ParticleRole::Subject => "subject",
			ParticleRole::Object => "object",
			ParticleRole::Direction => "direction",
		}
	}
}

impl fmt::Display for ParticleRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Assembles SOV sentences from role-marked phrases.
///
/// # Responsibilities
/// - Hold the word-order tag and the particle bank for each role
/// - Mark each phrase with a random particle of its role
/// - Keep the verb last regardless of which optional phrases are present
///
/// ## Invariants
/// - The word order and particle banks are fixed after construction
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SyntaxModel {
	word_order: String,
	particles: HashMap<ParticleRole, Vec<String>>,
}

impl SyntaxModel {
	/// Returns the default Japanese-style model.
	///
	/// Initializes:
	/// - word order "subject-object-verb"
	/// - subject particles wa, ga
	/// - object particle wo
	/// - direction particles e, o
	pub fn default() -> Self {
		let mut particles = HashMap::new();
		particles.insert(ParticleRole::Subject, to_strings(SUBJECT_PARTICLES));
		particles.insert(ParticleRole::Object, to_strings(OBJECT_PARTICLES));
		particles.insert(ParticleRole::Direction, to_strings(DIRECTION_PARTICLES));

		Self { word_order: DEFAULT_WORD_ORDER.to_owned(), particles }
	}

	/// Returns the word-order tag.
	pub fn get_word_order(&self) -> &str {
		&self.word_order
	}

	/// Returns the markers configured for a role.
	pub fn get_particles(&self, role: ParticleRole) -> &[String] {
		self.particles.get(&role).map(Vec::as_slice).unwrap_or_default()
	}

	/// Picks a random marker for a role.
	///
	/// A role with no configured markers yields the empty string, leaving
	/// the phrase unmarked.
	fn random_particle(&self, role: ParticleRole) -> &str {
		self.particles
			.get(&role)
			.and_then(|markers| markers.choose(&mut rand::rng()))
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Assembles an SOV sentence from its phrases.
	///
	/// # Parameters
	/// - `subject`: Subject word; always marked with a subject particle.
	/// - `verb`: Verb word; always the final token, unmarked.
	/// - `object`: Optional object word, marked with an object particle.
	/// - `adverb`: Optional adverb word, marked with a direction particle.
	///
	/// # Behavior
	/// - Phrases are joined with single spaces and terminated by a period.
	/// - The verb stays last for every combination of optional phrases.
	pub fn generate_sentence(
		&self,
		subject: &str,
		verb: &str,
		object: Option<&str>,
		adverb: Option<&str>,
	) -> String {
		let mut parts: Vec<String> = Vec::new();

		parts.push(format!("{}{}", subject, self.random_particle(ParticleRole::Subject)));

		if let Some(object) = object {
			parts.push(format!("{}{}", object, self.random_particle(ParticleRole::Object)));
		}

		if let Some(adverb) = adverb {
			parts.push(format!("{}{}", adverb, self.random_particle(ParticleRole::Direction)));
		}

		// Verb last, unmarked
		parts.push(verb.to_owned());

		format!("{}.", parts.join(" "))
	}
}

fn to_strings(markers: &[&str]) -> Vec<String> {
	markers.iter().map(|s| s.to_string()).collect()
}
