//! Family-specific feature conversion
//!
//! Each POS family turns the split segments of a tag into an ordered list of
//! target markers. Segments without a mapping are dropped; the drops are
//! recorded so callers can inspect them, but they never fail a conversion.

mod verb;

use crate::classifier::{HandlerKind, PosFamily};
use crate::error::TagsetResult;
use crate::mapping::MappingTable;
use crate::tagset::Tagset;
use crate::types::TargetMarker;

pub use verb::VerbResolver;

/// Markers produced for one tag, plus the segments that had no mapping
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub markers: Vec<TargetMarker>,
    pub dropped: Vec<String>,
}

impl Derivation {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn push(&mut self, marker: &TargetMarker) {
        self.markers.push(marker.clone());
    }

    /// Map one segment, recording it as dropped when the table has no entry
    fn map_segment(&mut self, mapping: &MappingTable, segment: &str) {
        match mapping.lookup(segment) {
            Some(marker) => self.push(marker),
            None => {
                tracing::trace!(segment, "no mapping for segment, dropped");
                self.dropped.push(segment.to_string());
            }
        }
    }

    fn map_segments<'s>(
        &mut self,
        mapping: &MappingTable,
        segments: impl IntoIterator<Item = &'s str>,
    ) {
        for segment in segments {
            self.map_segment(mapping, segment);
        }
    }
}

/// Target POS markers injected by the tagged and verb-form handlers
#[derive(Debug, Clone)]
struct InjectedPos {
    short_participle: TargetMarker,
    full_participle: TargetMarker,
    gerund: TargetMarker,
    infinitive: TargetMarker,
    short_adjective: TargetMarker,
    full_adjective: TargetMarker,
}

/// The full set of family handlers over one mapping table
#[derive(Debug, Clone)]
pub struct FeatureConverters {
    mapping: MappingTable,
    injected: InjectedPos,
    verb: VerbResolver,
}

impl FeatureConverters {
    pub fn new(tagset: &Tagset) -> TagsetResult<Self> {
        let pos = &tagset.target().pos;
        Ok(Self {
            mapping: MappingTable::from_tagset(tagset),
            injected: InjectedPos {
                short_participle: TargetMarker::new(pos.short_participle.as_str()),
                full_participle: TargetMarker::new(pos.full_participle.as_str()),
                gerund: TargetMarker::new(pos.gerund.as_str()),
                infinitive: TargetMarker::new(pos.infinitive.as_str()),
                short_adjective: TargetMarker::new(pos.short_adjective.as_str()),
                full_adjective: TargetMarker::new(pos.full_adjective.as_str()),
            },
            verb: VerbResolver::new(tagset)?,
        })
    }

    pub fn mapping(&self) -> &MappingTable {
        &self.mapping
    }

    /// Derive the markers of a classified tag
    ///
    /// `tag` is the trimmed raw tag and `segments` its delimiter-split form;
    /// segment 0 is the POS anchor.
    pub fn derive(&self, family: PosFamily, tag: &str, segments: &[&str]) -> Derivation {
        let mut derivation = Derivation::new();
        let grammemes = segments.get(1..).unwrap_or_default();

        match family.handler_kind() {
            HandlerKind::Generic => {
                derivation.map_segments(&self.mapping, segments.iter().copied());
            }
            HandlerKind::TaggedPos => {
                if let Some(marker) = self.injected_marker(family) {
                    derivation.push(marker);
                }
                derivation.map_segments(&self.mapping, segments.iter().copied());
            }
            HandlerKind::VerbForm => {
                if let Some(marker) = self.injected_marker(family) {
                    derivation.push(marker);
                }
                self.map_verb_form(grammemes, &mut derivation);
            }
            HandlerKind::Verb => {
                self.verb.derive(&self.mapping, tag, grammemes, &mut derivation);
            }
        }

        derivation
    }

    /// Plain per-segment lookup shared by participles, gerunds and infinitives
    fn map_verb_form(&self, grammemes: &[&str], derivation: &mut Derivation) {
        derivation.map_segments(&self.mapping, grammemes.iter().copied());
    }

    fn injected_marker(&self, family: PosFamily) -> Option<&TargetMarker> {
        match family {
            PosFamily::ShortParticiple => Some(&self.injected.short_participle),
            PosFamily::FullParticiple => Some(&self.injected.full_participle),
            PosFamily::Gerund => Some(&self.injected.gerund),
            PosFamily::Infinitive => Some(&self.injected.infinitive),
            PosFamily::ShortAdjective => Some(&self.injected.short_adjective),
            PosFamily::FullAdjective => Some(&self.injected.full_adjective),
            _ => None,
        }
    }
}
