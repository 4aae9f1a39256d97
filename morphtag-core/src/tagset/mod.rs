//! Tagset vocabularies
//!
//! A tagset bundles everything a converter needs to know about the two
//! schemes: the delimiter, the native tokens used by classification and verb
//! inference, the target markers injected by handlers, and the mapping table.
//! Tagsets are data; they are parsed from TOML and validated before use.

pub(crate) mod config;
pub(crate) mod loader;

use std::path::Path;

use crate::error::TagsetResult;

pub use config::{
    Mapping, Metadata, NativeForms, NativePos, NativeVerb, NativeVocabulary, TagsetConfig,
    TargetPos, TargetVerb, TargetVocabulary,
};
pub use loader::{embedded_source, get_tagset, list_available_tagsets, DEFAULT_TAGSET};

/// A validated tagset
#[derive(Debug, Clone)]
pub struct Tagset {
    config: TagsetConfig,
}

impl Tagset {
    /// Validate a configuration and wrap it
    pub fn from_config(config: TagsetConfig) -> TagsetResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse a tagset from TOML text
    pub fn from_toml_str(source: &str) -> TagsetResult<Self> {
        loader::parse_tagset("<inline>", source)
    }

    /// Load a tagset from a TOML file, optionally overriding its name
    pub fn from_file(path: &Path, name: Option<&str>) -> TagsetResult<Self> {
        loader::load_file(path, name)
    }

    /// The embedded SynTagRus -> OpenCorpora tagset
    pub fn builtin() -> TagsetResult<&'static Self> {
        get_tagset(DEFAULT_TAGSET)
    }

    pub fn name(&self) -> &str {
        &self.config.metadata.name
    }

    pub fn description(&self) -> &str {
        &self.config.metadata.description
    }

    /// Segment delimiter of native tags
    pub fn delimiter(&self) -> &str {
        &self.config.metadata.delimiter
    }

    pub fn native(&self) -> &NativeVocabulary {
        &self.config.native
    }

    pub fn target(&self) -> &TargetVocabulary {
        &self.config.target
    }

    pub fn mapping(&self) -> &Mapping {
        &self.config.mapping
    }

    pub fn config(&self) -> &TagsetConfig {
        &self.config
    }
}
