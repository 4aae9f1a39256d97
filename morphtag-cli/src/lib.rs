//! morphtag CLI library
//!
//! This library provides the command-line interface for converting
//! SynTagRus morphological tags into OpenCorpora markers.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
