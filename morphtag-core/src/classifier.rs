//! POS classification
//!
//! A native tag is assigned to exactly one POS family by scanning an ordered
//! rule list and taking the first rule whose pattern occurs anywhere in the
//! raw tag. Several patterns are supersets of others (every participle tag is
//! also a verb tag, every short adjective also an adjective), so the rule
//! order runs from most to least specific and is fixed at construction.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ConversionError, Result, TagsetError, TagsetResult};
use crate::tagset::{NativeVocabulary, Tagset};

/// Classification outcome, one per feature-conversion rule
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosFamily {
    ShortParticiple,
    FullParticiple,
    Gerund,
    Infinitive,
    Verb,
    Comparative,
    Adverb,
    ShortAdjective,
    Particle,
    FullAdjective,
    Numeral,
    Preposition,
    Conjunction,
    Interjection,
    Noun,
}

/// How a family's markers are derived
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HandlerKind {
    /// Map every segment, anchor included; nothing injected
    Generic,
    /// Inject the family's POS marker, then map every segment
    TaggedPos,
    /// Inject the family's POS marker, then map the grammemes after the anchor
    VerbForm,
    /// Finite verb: tense and mood are resolved separately
    Verb,
}

impl PosFamily {
    /// All families in classification order, most specific first
    pub const ALL: [PosFamily; 15] = [
        PosFamily::ShortParticiple,
        PosFamily::FullParticiple,
        PosFamily::Gerund,
        PosFamily::Infinitive,
        PosFamily::Verb,
        PosFamily::Comparative,
        PosFamily::Adverb,
        PosFamily::ShortAdjective,
        PosFamily::Particle,
        PosFamily::FullAdjective,
        PosFamily::Numeral,
        PosFamily::Preposition,
        PosFamily::Conjunction,
        PosFamily::Interjection,
        PosFamily::Noun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PosFamily::ShortParticiple => "short_participle",
            PosFamily::FullParticiple => "full_participle",
            PosFamily::Gerund => "gerund",
            PosFamily::Infinitive => "infinitive",
            PosFamily::Verb => "verb",
            PosFamily::Comparative => "comparative",
            PosFamily::Adverb => "adverb",
            PosFamily::ShortAdjective => "short_adjective",
            PosFamily::Particle => "particle",
            PosFamily::FullAdjective => "full_adjective",
            PosFamily::Numeral => "numeral",
            PosFamily::Preposition => "preposition",
            PosFamily::Conjunction => "conjunction",
            PosFamily::Interjection => "interjection",
            PosFamily::Noun => "noun",
        }
    }

    pub fn handler_kind(&self) -> HandlerKind {
        match self {
            PosFamily::ShortParticiple
            | PosFamily::FullParticiple
            | PosFamily::Gerund
            | PosFamily::Infinitive => HandlerKind::VerbForm,
            PosFamily::Verb => HandlerKind::Verb,
            PosFamily::ShortAdjective | PosFamily::FullAdjective => HandlerKind::TaggedPos,
            PosFamily::Comparative
            | PosFamily::Adverb
            | PosFamily::Particle
            | PosFamily::Numeral
            | PosFamily::Preposition
            | PosFamily::Conjunction
            | PosFamily::Interjection
            | PosFamily::Noun => HandlerKind::Generic,
        }
    }

    /// Native tokens that must occur, in order, for a tag to fall in this family
    fn pattern_tokens<'a>(&self, native: &'a NativeVocabulary) -> Vec<&'a str> {
        let pos = &native.pos;
        let forms = &native.forms;
        match self {
            PosFamily::ShortParticiple => vec![&pos.verb, &forms.participle, &forms.short],
            PosFamily::FullParticiple => vec![&pos.verb, &forms.participle],
            PosFamily::Gerund => vec![&pos.verb, &forms.gerund],
            PosFamily::Infinitive => vec![&pos.verb, &forms.infinitive],
            PosFamily::Verb => vec![&pos.verb],
            PosFamily::Comparative => vec![&forms.comparative],
            PosFamily::Adverb => vec![&pos.adverb],
            PosFamily::ShortAdjective => vec![&pos.adjective, &forms.short],
            PosFamily::Particle => vec![&pos.particle],
            PosFamily::FullAdjective => vec![&pos.adjective],
            PosFamily::Numeral => vec![&pos.numeral],
            PosFamily::Preposition => vec![&pos.preposition],
            PosFamily::Conjunction => vec![&pos.conjunction],
            PosFamily::Interjection => vec![&pos.interjection],
            PosFamily::Noun => vec![&pos.noun],
        }
        .into_iter()
        .map(String::as_str)
        .collect()
    }
}

impl fmt::Display for PosFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered token pattern searched anywhere in a raw tag
///
/// A token must start on a word boundary but may run on into a longer word,
/// so `V` does not match inside `ADV` while `A` still matches the compound
/// anchor `APRO`. Whole-word patterns also bound the right edge, keeping
/// `ПРОШ` from matching inside `ПРОШЕДШ`. Consecutive tokens must be
/// separated by at least one character.
#[derive(Debug, Clone)]
pub struct Pattern {
    tokens: Vec<String>,
    regex: Regex,
}

impl Pattern {
    /// Tokens bounded on the left only; used for POS classification
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> TagsetResult<Self> {
        Self::compile(tokens, "")
    }

    /// Tokens bounded on both sides
    pub fn whole_words<S: AsRef<str>>(tokens: &[S]) -> TagsetResult<Self> {
        Self::compile(tokens, r"\b")
    }

    fn compile<S: AsRef<str>>(tokens: &[S], right: &str) -> TagsetResult<Self> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        let source = tokens
            .iter()
            .map(|t| format!(r"\b{}{right}", regex::escape(t)))
            .collect::<Vec<_>>()
            .join(".+?");

        let regex = Regex::new(&source).map_err(|source| TagsetError::Pattern {
            tokens: tokens.clone(),
            source,
        })?;

        Ok(Self { tokens, regex })
    }

    #[inline]
    pub fn is_match(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// One entry of the ordered rule list
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub pattern: Pattern,
    pub family: PosFamily,
}

/// Ordered POS classifier
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<ClassificationRule>,
}

impl Classifier {
    /// Compile the rule list from a tagset's native vocabulary
    pub fn new(tagset: &Tagset) -> TagsetResult<Self> {
        let rules = PosFamily::ALL
            .iter()
            .map(|&family| {
                Ok(ClassificationRule {
                    pattern: Pattern::new(&family.pattern_tokens(tagset.native()))?,
                    family,
                })
            })
            .collect::<TagsetResult<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Family of the first rule matching the tag
    pub fn classify(&self, tag: &str) -> Result<PosFamily> {
        let family = self
            .rules
            .iter()
            .find(|rule| rule.pattern.is_match(tag))
            .map(|rule| rule.family)
            .ok_or_else(|| ConversionError::UnknownTag {
                tag: tag.to_string(),
            })?;

        tracing::debug!(tag, family = family.name(), "classified tag");
        Ok(family)
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(Tagset::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_rule_order_matches_family_order() {
        let classifier = classifier();
        let families: Vec<PosFamily> = classifier.rules().iter().map(|r| r.family).collect();
        assert_eq!(families, PosFamily::ALL.to_vec());
        assert_eq!(classifier.rules().last().unwrap().pattern.tokens(), ["S"]);
    }

    #[test]
    fn test_verb_forms_take_precedence_over_verb() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify("V@СОВ@ПРИЧ@ПРОШ@КР@ЕД@ЖЕН").unwrap(),
            PosFamily::ShortParticiple
        );
        assert_eq!(
            classifier.classify("V@НЕСОВ@ПРИЧ@НЕПРОШ@МН@РОД").unwrap(),
            PosFamily::FullParticiple
        );
        assert_eq!(
            classifier.classify("V@НЕСОВ@ДЕЕПР@НЕПРОШ").unwrap(),
            PosFamily::Gerund
        );
        assert_eq!(classifier.classify("V@СОВ@ИНФ").unwrap(), PosFamily::Infinitive);
        assert_eq!(
            classifier.classify("V@СОВ@ИЗЪЯВ@ПРОШ@МН").unwrap(),
            PosFamily::Verb
        );
    }

    #[test]
    fn test_short_form_needs_participle_marker_before_it() {
        // КР before ПРИЧ does not satisfy the ordered short-participle pattern
        assert_eq!(
            classifier().classify("V@КР@ПРИЧ").unwrap(),
            PosFamily::FullParticiple
        );
    }

    #[test]
    fn test_adjective_families() {
        let classifier = classifier();
        assert_eq!(classifier.classify("A@ЕД@ЖЕН@РОД").unwrap(), PosFamily::FullAdjective);
        assert_eq!(classifier.classify("A@КР@ЕД@СРЕД").unwrap(), PosFamily::ShortAdjective);
        assert_eq!(classifier.classify("A@СРАВ").unwrap(), PosFamily::Comparative);
    }

    #[test]
    fn test_adverb_is_not_a_verb() {
        let classifier = classifier();
        assert_eq!(classifier.classify("ADV").unwrap(), PosFamily::Adverb);
        assert_eq!(classifier.classify("ADV@СРАВ").unwrap(), PosFamily::Comparative);
    }

    #[test]
    fn test_closed_class_anchors() {
        let classifier = classifier();
        assert_eq!(classifier.classify("PART").unwrap(), PosFamily::Particle);
        assert_eq!(classifier.classify("NUM@ИМ").unwrap(), PosFamily::Numeral);
        assert_eq!(classifier.classify("PR").unwrap(), PosFamily::Preposition);
        assert_eq!(classifier.classify("CONJ").unwrap(), PosFamily::Conjunction);
        assert_eq!(classifier.classify("INTJ").unwrap(), PosFamily::Interjection);
        assert_eq!(classifier.classify("S").unwrap(), PosFamily::Noun);
    }

    #[test]
    fn test_unknown_tag() {
        match classifier().classify("XYZ@ЕД") {
            Err(ConversionError::UnknownTag { tag }) => assert_eq!(tag, "XYZ@ЕД"),
            other => panic!("Expected UnknownTag, got {other:?}"),
        }
    }

    #[test]
    fn test_pattern_bounds_left_edge_only() {
        let perfective = Pattern::new(&["СОВ", "НЕПРОШ"]).unwrap();
        assert!(perfective.is_match("V@СОВ@НЕПРОШ"));
        assert!(!perfective.is_match("V@НЕСОВ@НЕПРОШ"));
        assert!(!perfective.is_match("V@НЕПРОШ@СОВ"));

        let adjective = Pattern::new(&["A"]).unwrap();
        assert!(adjective.is_match("APRO@ЕД"));
        assert!(!adjective.is_match("PRAEDIC"));
    }

    #[test]
    fn test_whole_word_pattern() {
        let past = Pattern::whole_words(&["ПРОШ"]).unwrap();
        assert!(past.is_match("V@ПРОШ"));
        assert!(!past.is_match("V@НЕПРОШ"));
        assert!(!past.is_match("V@ПРОШЕДШ"));
        assert!(Pattern::new(&["ПРОШ"]).unwrap().is_match("V@ПРОШЕДШ"));
    }

    #[test]
    fn test_pattern_escapes_tokens() {
        let pattern = Pattern::new(&["1-Л"]).unwrap();
        assert!(pattern.is_match("V@1-Л@ЕД"));
        assert!(!pattern.is_match("V@21-Л"));
    }

    #[test]
    fn test_compound_anchors() {
        let classifier = classifier();
        assert_eq!(classifier.classify("APRO@ЕД@МУЖ@ИМ").unwrap(), PosFamily::FullAdjective);
        assert_eq!(classifier.classify("ANUM@ЕД@ИМ").unwrap(), PosFamily::FullAdjective);
        assert_eq!(classifier.classify("SPRO@ЕД@1-Л@ИМ").unwrap(), PosFamily::Noun);
        assert_eq!(classifier.classify("ADVPRO").unwrap(), PosFamily::Adverb);
        assert_eq!(classifier.classify("PARENTH").unwrap(), PosFamily::Particle);
        assert_eq!(classifier.classify("PRAEDIC").unwrap(), PosFamily::Preposition);
    }

    #[test]
    fn test_family_metadata() {
        assert_eq!(PosFamily::ShortParticiple.to_string(), "short_participle");
        assert_eq!(PosFamily::Verb.handler_kind(), HandlerKind::Verb);
        assert_eq!(PosFamily::Gerund.handler_kind(), HandlerKind::VerbForm);
        assert_eq!(PosFamily::FullAdjective.handler_kind(), HandlerKind::TaggedPos);
        assert_eq!(PosFamily::Noun.handler_kind(), HandlerKind::Generic);
    }
}
