//! Tag list reading
//!
//! A tag list holds one native tag per line. Blank lines and lines starting
//! with `#` are skipped; surrounding whitespace is left for the converter to
//! trim.

use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Reader for tag list files and streams
pub struct FileReader;

impl FileReader {
    /// Read all tags from a file
    pub fn read_tags(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::parse_tags(&content))
    }

    /// Read all tags from a buffered stream such as stdin
    pub fn read_tags_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
        let mut tags = Vec::new();
        for line in reader.lines() {
            let line = line.context("Failed to read input")?;
            if is_tag_line(&line) {
                tags.push(line);
            }
        }
        Ok(tags)
    }

    /// Split text into tag lines
    pub fn parse_tags(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| is_tag_line(line))
            .map(str::to_string)
            .collect()
    }
}

fn is_tag_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}
