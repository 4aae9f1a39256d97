//! Conversion of SynTagRus morphological tags into OpenCorpora markers
//!
//! A SynTagRus tag is a POS anchor followed by grammemes, joined with `@`
//! (`S@ЕД@ЖЕН@РОД@НЕОД`). Forward conversion classifies the tag into one of
//! the POS families, then lets that family's handler derive an ordered list
//! of OpenCorpora markers (`NOUN sing femn gent inan`).
//!
//! # Architecture
//!
//! - **Tagset**: both vocabularies and the mapping table, loaded from
//!   embedded TOML configuration
//! - **Classifier**: ordered pattern rules, first match wins
//! - **Features**: per-family handlers turning segments into markers
//! - **Converter**: the facade tying the above together
//! - **Reverse**: the contract for an external engine converting back
//!
//! # Example
//!
//! ```rust
//! use morphtag_core::TagConverter;
//!
//! let converter = TagConverter::builtin().unwrap();
//!
//! let markers = converter.convert("S@ЕД@ЖЕН@РОД@НЕОД").unwrap();
//! assert_eq!(markers, ["NOUN", "sing", "femn", "gent", "inan"]);
//!
//! // Unmapped segments are dropped, never rejected
//! let report = converter.convert_with_report("V@СОВ@ИЗЪЯВ@ПРОШ@МН").unwrap();
//! assert_eq!(report.markers, ["VERB", "perf", "plur", "indc", "past"]);
//! assert_eq!(report.dropped, ["ИЗЪЯВ"]);
//! ```

pub mod classifier;
pub mod converter;
pub mod error;
pub mod features;
pub mod mapping;
pub mod reverse;
pub mod tagset;
pub mod types;

pub use classifier::{ClassificationRule, Classifier, HandlerKind, Pattern, PosFamily};
pub use converter::{Conversion, TagConverter};
pub use error::{
    ConversionError, EngineError, EngineResult, Result, TagsetError, TagsetResult,
};
pub use features::{Derivation, FeatureConverters};
pub use mapping::MappingTable;
pub use reverse::{EngineSession, ReverseConverter, ReverseEngine};
pub use tagset::{get_tagset, list_available_tagsets, Tagset, DEFAULT_TAGSET};
pub use types::{NativeTag, TargetMarker};

#[cfg(feature = "native-engine")]
pub use reverse::NativeEngine;
