//! Core value types shared across the converter

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tag in the native (lemmatizer) scheme, `POS@gram1@...@gramN`
///
/// The first segment anchors classification; the remaining segments are
/// grammemes whose order carries no meaning of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeTag(String);

impl NativeTag {
    /// Create a tag from its raw string form
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Raw tag string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NativeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NativeTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for NativeTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// An opaque marker of the target (OpenCorpora) scheme
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetMarker(String);

impl TargetMarker {
    /// Create a marker
    pub fn new(marker: impl Into<String>) -> Self {
        Self(marker.into())
    }

    /// Marker text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TargetMarker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetMarker {
    fn from(marker: &str) -> Self {
        Self::new(marker)
    }
}

impl PartialEq<str> for TargetMarker {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TargetMarker {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
