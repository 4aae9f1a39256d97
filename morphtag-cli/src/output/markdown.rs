//! Markdown output formatter

use super::{OutputFormatter, TagRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs conversions as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    report_dropped: bool,
    tag_count: usize,
    error_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, report_dropped: bool) -> Self {
        Self {
            writer,
            report_dropped,
            tag_count: 0,
            error_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if self.report_dropped {
            writeln!(self.writer, "| Tag | Family | Markers | Dropped |")?;
            writeln!(self.writer, "|-----|--------|---------|---------|")?;
        } else {
            writeln!(self.writer, "| Tag | Family | Markers |")?;
            writeln!(self.writer, "|-----|--------|---------|")?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &TagRecord) -> Result<()> {
        if self.tag_count == 0 {
            self.write_header()?;
        }
        self.tag_count += 1;

        let family = record.family.map(|f| f.name()).unwrap_or("-");
        let markers = match &record.error {
            Some(error) => {
                self.error_count += 1;
                format!("*{error}*")
            }
            None => record.markers.join(" "),
        };

        write!(self.writer, "| `{}` | {} | {} |", record.tag, family, markers)?;
        if self.report_dropped {
            write!(self.writer, " {} |", record.dropped.join(" "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total tags: {}, failed: {}*",
            self.tag_count, self.error_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
