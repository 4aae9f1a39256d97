//! Output formatting module

use anyhow::Result;
use morphtag_core::{Conversion, ConversionError, PosFamily};
use serde::Serialize;

/// Outcome of converting one input tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagRecord {
    /// Tag as read from the input
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<PosFamily>,
    pub markers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TagRecord {
    pub fn new(tag: &str, result: Result<Conversion, ConversionError>) -> Self {
        match result {
            Ok(conversion) => Self {
                tag: conversion.tag,
                family: Some(conversion.family),
                markers: conversion.markers.iter().map(|m| m.to_string()).collect(),
                dropped: conversion.dropped,
                error: None,
            },
            Err(e) => Self {
                tag: tag.trim().to_string(),
                family: None,
                markers: Vec::new(),
                dropped: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single conversion
    fn format_record(&mut self, record: &TagRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
