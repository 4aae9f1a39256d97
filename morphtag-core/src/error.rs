//! Layered error types
//!
//! Conversion, configuration and reverse-engine failures are kept apart so
//! callers can tell a bad tag from a bad tagset or a failing native library.

use thiserror::Error;

/// Forward conversion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The tag matched none of the classification patterns
    #[error("unknown tag '{tag}'")]
    UnknownTag {
        /// The offending tag, after whitespace trimming
        tag: String,
    },
}

/// Tagset configuration errors
#[derive(Error, Debug)]
pub enum TagsetError {
    /// The TOML document could not be parsed
    #[error("failed to parse tagset '{name}': {reason}")]
    Parse {
        /// Tagset name or file path
        name: String,
        /// Parser message
        reason: String,
    },

    /// The tagset file could not be read
    #[error("failed to read tagset file '{path}': {source}")]
    Io {
        /// The file path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The tagset parsed but violates a structural rule
    #[error("invalid tagset: {0}")]
    Invalid(String),

    /// A vocabulary token could not be compiled into a pattern
    #[error("invalid pattern for token sequence {tokens:?}: {source}")]
    Pattern {
        /// Tokens the pattern was built from
        tokens: Vec<String>,
        /// Regex compiler error
        #[source]
        source: regex::Error,
    },

    /// No embedded tagset under this name
    #[error("unknown tagset: {0}")]
    UnknownTagset(String),
}

/// Reverse conversion engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine refused to hand out a converter handle
    #[error("failed to create converter: {0}")]
    Create(String),

    /// The engine rejected the submitted marker list
    #[error("conversion failed: {0}")]
    Convert(String),

    /// A variant index outside `0..count` was requested
    #[error("variant index {index} out of range (count {count})")]
    FetchOutOfRange {
        /// Requested index
        index: usize,
        /// Number of variants produced by the last conversion
        count: usize,
    },

    /// A marker cannot cross the foreign-call boundary
    #[error("marker '{0}' cannot be passed to the engine")]
    InvalidMarker(String),

    /// The engine returned text that could not be decoded
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Result type for forward conversion
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Result type for tagset operations
pub type TagsetResult<T> = std::result::Result<T, TagsetError>;

/// Result type for reverse-engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_display() {
        let error = ConversionError::UnknownTag {
            tag: "XYZ@ЕД".to_string(),
        };
        assert_eq!(error.to_string(), "unknown tag 'XYZ@ЕД'");
    }

    #[test]
    fn test_fetch_out_of_range_display() {
        let error = EngineError::FetchOutOfRange { index: 3, count: 2 };
        assert_eq!(
            error.to_string(),
            "variant index 3 out of range (count 2)"
        );
    }

    #[test]
    fn test_tagset_invalid_display() {
        let error = TagsetError::Invalid("empty delimiter".to_string());
        assert_eq!(error.to_string(), "invalid tagset: empty delimiter");
    }
}
