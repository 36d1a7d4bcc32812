use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of an affix relative to the base word.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffixKind {
	Prefix,
	Suffix,
}

impl AffixKind {
	/// Lowercase label used in rule dumps.
	pub fn label(&self) -> &'static str {
		match self {
			AffixKind::Prefix => "prefix",
			AffixKind::Suffix => "suffix",
		}
	}
}

impl fmt::Display for AffixKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A named affix transformation.
///
/// ## Invariants
/// - `name` is unique within a `MorphologyModel`; registering the same name
///   again replaces the earlier definition
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MorphologyRule {
	/// Lookup key, e.g. "plural".
	pub name: String,
	/// Whether the marker attaches before or after the base word.
	pub kind: AffixKind,
	/// The affix string itself.
	pub marker: String,
	/// Human-readable meaning shown in rule dumps.
	pub meaning: String,
}

/// Registry of affix rules with lookup-by-name application.
///
/// # Responsibilities
/// - Store rules keyed by name, preserving insertion order for display
/// - Apply a named rule to a base word
/// - Degrade to the identity transformation when a name is unknown
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MorphologyModel {
	/// Rules indexed by their name.
	rules: HashMap<String, MorphologyRule>,
	/// Names in first-insertion order; an overwrite keeps the original slot.
	order: Vec<String>,
}

impl MorphologyModel {
	/// Returns an empty registry.
	pub fn default() -> Self {
		Self { rules: HashMap::new(), order: Vec::new() }
	}

	/// Registers a rule, replacing any earlier rule of the same name.
	///
	/// # Behavior
	/// - A new name is appended to the display order.
	/// - A known name overwrites the definition in place and keeps its
	///   position in the display order.
	pub fn add_rule(&mut self, name: &str, kind: AffixKind, marker: &str, meaning: &str) {
		let rule = MorphologyRule {
			name: name.to_owned(),
			kind,
			marker: marker.to_owned(),
			meaning: meaning.to_owned(),
		};
		if self.rules.insert(name.to_owned(), rule).is_none() {
			self.order.push(name.to_owned());
		}
	}

	/// Applies the named rule to a base word.
	///
	/// # Behavior
	/// - Prefix rules return `marker + base_word`.
	/// - Suffix rules return `base_word + marker`.
	/// - An unknown name returns `base_word` unchanged; this is a silent
	///   no-op, not an error.
	pub fn apply(&self, base_word: &str, rule_name: &str) -> String {
		match self.rules.get(rule_name) {
			Some(rule) => match rule.kind {
				AffixKind::Prefix => format!("{}{}", rule.marker, base_word),
				AffixKind::Suffix => format!("{}{}", base_word, rule.marker),
			},
			None => base_word.to_owned(),
		}
	}

	/// Returns the rule registered under `name`, if any.
	pub fn get_rule(&self, name: &str) -> Option<&MorphologyRule> {
		self.rules.get(name)
	}

	/// Returns the rules in first-insertion order.
	pub fn rules(&self) -> impl Iterator<Item = &MorphologyRule> {
		self.order.iter().filter_map(|name| self.rules.get(name))
	}

	/// Returns how many rules are registered.
	pub fn rule_count(&self) -> usize {
		self.order.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn stock_rules() -> MorphologyModel {
		let mut morphology = MorphologyModel::default();
		morphology.add_rule("plural", AffixKind::Suffix, "tachi", "plural");
		morphology.add_rule("past", AffixKind::Suffix, "ta", "past tense");
		morphology.add_rule("negative", AffixKind::Prefix, "fu", "negation");
		morphology
	}

	#[test]
	fn suffix_rules_append_their_marker() {
		let morphology = stock_rules();
		assert_eq!(morphology.apply("neko", "plural"), "nekotachi");
		assert_eq!(morphology.apply("miru", "past"), "miruta");
	}

	#[test]
	fn prefix_rules_prepend_their_marker() {
		let morphology = stock_rules();
		assert_eq!(morphology.apply("takai", "negative"), "futakai");
	}

	#[test]
	fn unknown_rule_is_identity() {
		let morphology = stock_rules();
		assert_eq!(morphology.apply("neko", "honorific"), "neko");
		assert_eq!(MorphologyModel::default().apply("neko", "plural"), "neko");
	}

	#[test]
	fn duplicate_name_overwrites_and_keeps_position() {
		let mut morphology = stock_rules();
		morphology.add_rule("plural", AffixKind::Suffix, "ra", "casual plural");

		assert_eq!(morphology.rule_count(), 3);
		assert_eq!(morphology.apply("neko", "plural"), "nekora");

		let names: Vec<&str> = morphology.rules().map(|rule| rule.name.as_str()).collect();
		assert_eq!(names, vec!["plural", "past", "negative"]);
	}

	#[test]
	fn rules_iterate_in_insertion_order() {
		let morphology = stock_rules();
		let markers: Vec<&str> = morphology.rules().map(|rule| rule.marker.as_str()).collect();
		assert_eq!(markers, vec!["tachi", "ta", "fu"]);
	}
}
