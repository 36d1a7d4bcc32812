//! Pseudo-Japanese language generation library.
//!
//! This crate provides the generation model behind a small language-creation
//! toy, including:
//! - Syllable and word generation from fixed phoneme inventories
//! - Affix-rule morphology (plural, past tense, negation)
//! - SOV sentence assembly with role particles
//! - A per-session vocabulary store
//!
//! Only the generation model is provided here. Frontends own the widgets and
//! event wiring; they drive a [`model::language::Language`] session and
//! render its string outputs.

/// Core language models and generation logic.
///
/// This module exposes the session interface and the component models while
/// keeping internal helpers private.
pub mod model;
