//! Tagset loader
//!
//! Manages embedded and file-based tagsets. Embedded tagsets are parsed once,
//! on first access, and shared for the rest of the process.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use super::{config::TagsetConfig, Tagset};
use crate::error::{TagsetError, TagsetResult};

/// Name of the tagset used when none is requested explicitly
pub const DEFAULT_TAGSET: &str = "syntagrus-opencorpora";

macro_rules! embed_tagset {
    ($name:expr, $path:expr) => {
        ($name, include_str!($path))
    };
}

const EMBEDDED_SOURCES: [(&str, &str); 1] = [embed_tagset!(
    DEFAULT_TAGSET,
    "../../configs/tagsets/syntagrus_opencorpora.toml"
)];

static EMBEDDED: OnceLock<HashMap<String, Tagset>> = OnceLock::new();

fn load_embedded_tagsets() -> HashMap<String, Tagset> {
    let mut tagsets = HashMap::new();

    for (name, source) in EMBEDDED_SOURCES {
        match parse_tagset(name, source) {
            Ok(tagset) if tagset.name() == name => {
                tracing::info!(tagset = name, "loaded embedded tagset");
                tagsets.insert(name.to_string(), tagset);
            }
            Ok(tagset) => {
                tracing::error!(
                    expected = name,
                    found = tagset.name(),
                    "embedded tagset name mismatch"
                );
            }
            Err(e) => {
                tracing::error!(tagset = name, error = %e, "failed to load embedded tagset");
            }
        }
    }

    tagsets
}

/// Look up an embedded tagset by name
pub fn get_tagset(name: &str) -> TagsetResult<&'static Tagset> {
    EMBEDDED
        .get_or_init(load_embedded_tagsets)
        .get(name)
        .ok_or_else(|| TagsetError::UnknownTagset(name.to_string()))
}

/// Names of all embedded tagsets, sorted
pub fn list_available_tagsets() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = EMBEDDED
        .get_or_init(load_embedded_tagsets)
        .keys()
        .map(|s| s.as_str())
        .collect();
    names.sort_unstable();
    names
}

/// Raw TOML source of an embedded tagset
pub fn embedded_source(name: &str) -> Option<&'static str> {
    EMBEDDED_SOURCES
        .iter()
        .find(|(embedded, _)| *embedded == name)
        .map(|(_, source)| *source)
}

/// Parse and validate a tagset from TOML text
pub(crate) fn parse_tagset(name: &str, source: &str) -> TagsetResult<Tagset> {
    let config: TagsetConfig = toml::from_str(source).map_err(|e| TagsetError::Parse {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    Tagset::from_config(config)
}

/// Load a tagset from an external TOML file
pub(crate) fn load_file(path: &Path, name: Option<&str>) -> TagsetResult<Tagset> {
    let content = std::fs::read_to_string(path).map_err(|source| TagsetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut config: TagsetConfig =
        toml::from_str(&content).map_err(|e| TagsetError::Parse {
            name: path.display().to_string(),
            reason: e.to_string(),
        })?;

    // Override tagset name if provided
    if let Some(name) = name {
        config.metadata.name = name.to_string();
    }

    tracing::debug!(path = %path.display(), tagset = %config.metadata.name, "loaded tagset file");
    Tagset::from_config(config)
}
