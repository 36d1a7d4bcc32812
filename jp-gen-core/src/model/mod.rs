//! Top-level module for the language generation system.
//!
//! This crate provides the generation model of a language-creation toy,
//! including:
//! - Syllable and word generation (`PhonologyModel`)
//! - Affix-rule morphology (`MorphologyModel`)
//! - SOV sentence assembly (`SyntaxModel`)
//! - Per-session vocabulary (`VocabularyStore`)
//! - A high-level session interface (`Language`)

/// High-level session interface owning the component models and the
/// vocabulary store.
///
/// Exposes the frontend-facing operations: vocabulary batches, morphology
/// showcases, sentence generation, and the full-language showcase.
pub mod language;

/// Affix-rule registry and application.
///
/// Rules are keyed by name; unknown names degrade to the identity
/// transformation.
pub mod morphology_model;

/// Syllable and word generation from fixed phoneme inventories.
///
/// Also defines the word classes shared by the store and the session.
pub mod phonology_model;

/// SOV sentence assembly with role particles.
pub mod syntax_model;

/// Per-session vocabulary store keyed by word class.
pub mod vocabulary_store;
