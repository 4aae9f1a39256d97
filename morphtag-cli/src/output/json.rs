//! JSON output formatter

use super::{OutputFormatter, TagRecord};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs all records as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<TagRecord>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &TagRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphtag_core::TagConverter;
    use serde_json::Value;

    fn render(tags: &[&str], pretty: bool) -> String {
        let converter = TagConverter::builtin().unwrap();
        let mut formatter = JsonFormatter::new(Vec::new(), pretty);
        for tag in tags {
            let record = TagRecord::new(tag, converter.convert_with_report(tag));
            formatter.format_record(&record).unwrap();
        }
        formatter.finish().unwrap();
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_json_array_fields() {
        let output = render(&["V@СОВ@ИЗЪЯВ@ПРОШ@МН", "XYZ"], true);
        let value: Value = serde_json::from_str(&output).unwrap();

        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0]["family"], "verb");
        assert_eq!(records[0]["markers"][4], "past");
        assert_eq!(records[0]["dropped"][0], "ИЗЪЯВ");
        assert!(records[0].get("error").is_none());

        assert_eq!(records[1]["tag"], "XYZ");
        assert!(records[1].get("family").is_none());
        assert_eq!(records[1]["error"], "unknown tag 'XYZ'");
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let output = render(&["PART"], false);
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with(r#"[{"tag":"PART""#));
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        assert_eq!(render(&[], false).trim(), "[]");
    }
}
