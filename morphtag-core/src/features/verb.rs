//! Finite verb handler
//!
//! Tense segments are kept out of the plain mapping pass; the verb's tense is
//! inferred from the whole tag instead, by priority:
//!
//! 1. explicit present marker -> present
//! 2. explicit past marker -> past
//! 3. perfective aspect followed by non-past -> future
//! 4. imperfective aspect followed by non-past -> present
//!
//! Mood is indicative unless the imperative marker is present.

use std::collections::HashSet;

use super::Derivation;
use crate::classifier::Pattern;
use crate::error::TagsetResult;
use crate::mapping::MappingTable;
use crate::tagset::Tagset;
use crate::types::TargetMarker;

/// Tense and mood resolution for the generic verb family
#[derive(Debug, Clone)]
pub struct VerbResolver {
    verb: TargetMarker,
    indicative: TargetMarker,
    imperative: String,
    tense_segments: HashSet<String>,
    /// Tense signals in priority order
    signals: Vec<(Pattern, TargetMarker)>,
}

impl VerbResolver {
    pub fn new(tagset: &Tagset) -> TagsetResult<Self> {
        let native = &tagset.native().verb;
        let target = tagset.target();

        let signals = vec![
            (
                Pattern::whole_words(&[&native.present])?,
                TargetMarker::new(target.verb.present.as_str()),
            ),
            (
                Pattern::whole_words(&[&native.past])?,
                TargetMarker::new(target.verb.past.as_str()),
            ),
            (
                Pattern::whole_words(&[&native.perfective, &native.non_past])?,
                TargetMarker::new(target.verb.future.as_str()),
            ),
            (
                Pattern::whole_words(&[&native.imperfective, &native.non_past])?,
                TargetMarker::new(target.verb.present.as_str()),
            ),
        ];

        Ok(Self {
            verb: TargetMarker::new(target.pos.verb.as_str()),
            indicative: TargetMarker::new(target.verb.indicative.as_str()),
            imperative: native.imperative.clone(),
            tense_segments: native.tense.iter().cloned().collect(),
            signals,
        })
    }

    /// Append the markers of a finite verb tag to `derivation`
    ///
    /// `grammemes` are the segments after the anchor.
    pub(crate) fn derive(
        &self,
        mapping: &MappingTable,
        tag: &str,
        grammemes: &[&str],
        derivation: &mut Derivation,
    ) {
        derivation.push(&self.verb);

        derivation.map_segments(
            mapping,
            grammemes
                .iter()
                .copied()
                .filter(|segment| !self.tense_segments.contains(*segment)),
        );

        if !grammemes.contains(&self.imperative.as_str()) {
            derivation.push(&self.indicative);
        }

        if let Some(tense) = self.resolve_tense(tag) {
            derivation.push(tense);
        }
    }

    /// First matching tense signal, if any
    pub fn resolve_tense(&self, tag: &str) -> Option<&TargetMarker> {
        self.signals
            .iter()
            .find(|(pattern, _)| pattern.is_match(tag))
            .map(|(_, tense)| tense)
    }
}
