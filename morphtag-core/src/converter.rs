//! Tag converter facade
//!
//! `TagConverter` is the single entry point of forward conversion: trim,
//! classify, dispatch to the family handler, return its markers verbatim.
//! All of its state is built at construction and never mutated, so one
//! instance can serve any number of threads.

use serde::Serialize;
use std::sync::OnceLock;

use crate::classifier::{Classifier, PosFamily};
use crate::error::{Result, TagsetError, TagsetResult};
use crate::features::FeatureConverters;
use crate::mapping::MappingTable;
use crate::tagset::Tagset;
use crate::types::TargetMarker;

static BUILTIN: OnceLock<std::result::Result<TagConverter, String>> = OnceLock::new();

/// Result of a conversion with diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The trimmed input tag
    pub tag: String,
    /// Family the tag was classified as
    pub family: PosFamily,
    /// Target markers, identical to what `convert` returns
    pub markers: Vec<TargetMarker>,
    /// Segments dropped for lack of a mapping, in tag order
    pub dropped: Vec<String>,
}

impl Conversion {
    /// Number of segments silently dropped
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

/// Forward converter from native tags to target marker lists
#[derive(Debug, Clone)]
pub struct TagConverter {
    tagset_name: String,
    delimiter: String,
    classifier: Classifier,
    features: FeatureConverters,
}

impl TagConverter {
    /// Build a converter for a validated tagset
    pub fn new(tagset: &Tagset) -> TagsetResult<Self> {
        let converter = Self {
            tagset_name: tagset.name().to_string(),
            delimiter: tagset.delimiter().to_string(),
            classifier: Classifier::new(tagset)?,
            features: FeatureConverters::new(tagset)?,
        };

        tracing::debug!(
            tagset = %converter.tagset_name,
            mappings = converter.features.mapping().len(),
            "built tag converter"
        );
        Ok(converter)
    }

    /// Shared converter over the embedded tagset, built on first use
    pub fn builtin() -> TagsetResult<&'static Self> {
        BUILTIN
            .get_or_init(|| {
                Tagset::builtin()
                    .and_then(Self::new)
                    .map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|reason| TagsetError::Invalid(reason.clone()))
    }

    /// Convert a native tag into its ordered target markers
    pub fn convert(&self, tag: &str) -> Result<Vec<TargetMarker>> {
        self.convert_with_report(tag)
            .map(|conversion| conversion.markers)
    }

    /// Convert and report the family and any dropped segments
    pub fn convert_with_report(&self, tag: &str) -> Result<Conversion> {
        let tag = tag.trim();
        let family = self.classifier.classify(tag)?;
        let segments: Vec<&str> = tag.split(self.delimiter.as_str()).collect();
        let derivation = self.features.derive(family, tag, &segments);

        if !derivation.dropped.is_empty() {
            tracing::trace!(tag, dropped = ?derivation.dropped, "unmapped segments dropped");
        }

        Ok(Conversion {
            tag: tag.to_string(),
            family,
            markers: derivation.markers,
            dropped: derivation.dropped,
        })
    }

    /// Classify a tag without converting it
    pub fn classify(&self, tag: &str) -> Result<PosFamily> {
        self.classifier.classify(tag.trim())
    }

    /// Convert many tags; each one succeeds or fails on its own
    pub fn convert_all<'a, I>(&self, tags: I) -> Vec<Result<Vec<TargetMarker>>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().map(|tag| self.convert(tag)).collect()
    }

    pub fn tagset_name(&self) -> &str {
        &self.tagset_name
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn mapping(&self) -> &MappingTable {
        self.features.mapping()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}
