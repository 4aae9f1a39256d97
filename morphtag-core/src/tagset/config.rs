//! Configuration structures and validation
//!
//! This module defines the TOML schema for a tagset: the native vocabulary
//! consulted by classification and verb inference, the target markers the
//! handlers inject, and the grammeme mapping table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{TagsetError, TagsetResult};

/// Root tagset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsetConfig {
    pub metadata: Metadata,
    pub native: NativeVocabulary,
    pub target: TargetVocabulary,
    pub mapping: Mapping,
}

/// Tagset metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

/// Native-scheme tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeVocabulary {
    pub pos: NativePos,
    pub forms: NativeForms,
    pub verb: NativeVerb,
}

/// POS anchors of the native scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativePos {
    pub noun: String,
    pub adjective: String,
    pub verb: String,
    pub adverb: String,
    pub numeral: String,
    pub preposition: String,
    pub conjunction: String,
    pub particle: String,
    pub interjection: String,
}

/// Markers that select a verb form or an adjective sub-family
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeForms {
    pub participle: String,
    pub gerund: String,
    pub infinitive: String,
    pub short: String,
    pub comparative: String,
}

/// Markers consulted when resolving verb tense and mood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeVerb {
    pub present: String,
    pub past: String,
    pub non_past: String,
    pub perfective: String,
    pub imperfective: String,
    pub imperative: String,
    /// Segments skipped by the generic verb mapping pass
    pub tense: Vec<String>,
}

/// Target-scheme markers emitted by handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetVocabulary {
    pub pos: TargetPos,
    pub verb: TargetVerb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetPos {
    pub short_participle: String,
    pub full_participle: String,
    pub gerund: String,
    pub infinitive: String,
    pub verb: String,
    pub short_adjective: String,
    pub full_adjective: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetVerb {
    pub indicative: String,
    pub present: String,
    pub past: String,
    pub future: String,
}

/// Native -> target mapping grouped by grammatical category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mapping {
    #[serde(flatten)]
    pub categories: HashMap<String, HashMap<String, String>>,
}

fn default_delimiter() -> String {
    "@".to_string()
}

impl TagsetConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> TagsetResult<()> {
        let delimiter = &self.metadata.delimiter;

        if self.metadata.name.trim().is_empty() {
            return Err(TagsetError::Invalid("tagset name is empty".to_string()));
        }

        if delimiter.is_empty() {
            return Err(TagsetError::Invalid("delimiter is empty".to_string()));
        }

        // Classification tokens are matched on word boundaries
        for (field, token) in self.native_tokens() {
            check_token(field, token, delimiter)?;
            check_word_edges(field, token)?;
        }

        for (field, token) in self.target_tokens() {
            if token.trim().is_empty() {
                return Err(TagsetError::Invalid(format!(
                    "target marker '{field}' is empty"
                )));
            }
        }

        if self.native.verb.tense.is_empty() {
            return Err(TagsetError::Invalid(
                "verb tense marker set is empty".to_string(),
            ));
        }
        for token in &self.native.verb.tense {
            check_token("native.verb.tense", token, delimiter)?;
        }

        if self.mapping.categories.values().all(|c| c.is_empty()) {
            return Err(TagsetError::Invalid("mapping table is empty".to_string()));
        }

        // A native marker listed under two categories must agree on its target
        let mut seen: HashMap<&str, (&str, &str)> = HashMap::new();
        for (category, entries) in &self.mapping.categories {
            for (native, target) in entries {
                check_token(&format!("mapping.{category}"), native, delimiter)?;
                if target.trim().is_empty() {
                    return Err(TagsetError::Invalid(format!(
                        "mapping.{category}: '{native}' maps to an empty marker"
                    )));
                }
                if let Some((other_category, other_target)) =
                    seen.insert(native.as_str(), (category.as_str(), target.as_str()))
                {
                    if other_target != target.as_str() {
                        return Err(TagsetError::Invalid(format!(
                            "'{native}' maps to '{other_target}' in mapping.{other_category} \
                             and to '{target}' in mapping.{category}"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    fn native_tokens(&self) -> [(&'static str, &str); 20] {
        let pos = &self.native.pos;
        let forms = &self.native.forms;
        let verb = &self.native.verb;
        [
            ("native.pos.noun", pos.noun.as_str()),
            ("native.pos.adjective", pos.adjective.as_str()),
            ("native.pos.verb", pos.verb.as_str()),
            ("native.pos.adverb", pos.adverb.as_str()),
            ("native.pos.numeral", pos.numeral.as_str()),
            ("native.pos.preposition", pos.preposition.as_str()),
            ("native.pos.conjunction", pos.conjunction.as_str()),
            ("native.pos.particle", pos.particle.as_str()),
            ("native.pos.interjection", pos.interjection.as_str()),
            ("native.forms.participle", forms.participle.as_str()),
            ("native.forms.gerund", forms.gerund.as_str()),
            ("native.forms.infinitive", forms.infinitive.as_str()),
            ("native.forms.short", forms.short.as_str()),
            ("native.forms.comparative", forms.comparative.as_str()),
            ("native.verb.present", verb.present.as_str()),
            ("native.verb.past", verb.past.as_str()),
            ("native.verb.non_past", verb.non_past.as_str()),
            ("native.verb.perfective", verb.perfective.as_str()),
            ("native.verb.imperfective", verb.imperfective.as_str()),
            ("native.verb.imperative", verb.imperative.as_str()),
        ]
    }

    fn target_tokens(&self) -> [(&'static str, &str); 11] {
        let pos = &self.target.pos;
        let verb = &self.target.verb;
        [
            ("target.pos.short_participle", pos.short_participle.as_str()),
            ("target.pos.full_participle", pos.full_participle.as_str()),
            ("target.pos.gerund", pos.gerund.as_str()),
            ("target.pos.infinitive", pos.infinitive.as_str()),
            ("target.pos.verb", pos.verb.as_str()),
            ("target.pos.short_adjective", pos.short_adjective.as_str()),
            ("target.pos.full_adjective", pos.full_adjective.as_str()),
            ("target.verb.indicative", verb.indicative.as_str()),
            ("target.verb.present", verb.present.as_str()),
            ("target.verb.past", verb.past.as_str()),
            ("target.verb.future", verb.future.as_str()),
        ]
    }
}

fn check_token(field: &str, token: &str, delimiter: &str) -> TagsetResult<()> {
    if token.trim().is_empty() {
        return Err(TagsetError::Invalid(format!("{field}: empty token")));
    }
    if token.contains(delimiter) {
        return Err(TagsetError::Invalid(format!(
            "{field}: token '{token}' contains the delimiter '{delimiter}'"
        )));
    }
    if token.chars().any(char::is_whitespace) {
        return Err(TagsetError::Invalid(format!(
            "{field}: token '{token}' contains whitespace"
        )));
    }
    Ok(())
}

fn check_word_edges(field: &str, token: &str) -> TagsetResult<()> {
    let is_word = |ch: Option<char>| ch.is_some_and(|c| c.is_alphanumeric() || c == '_');
    if !is_word(token.chars().next()) || !is_word(token.chars().last()) {
        return Err(TagsetError::Invalid(format!(
            "{field}: token '{token}' must start and end with a letter or digit"
        )));
    }
    Ok(())
}
