//! Plain text output formatter

use super::{OutputFormatter, TagRecord};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one `tag<TAB>markers` line per input tag
pub struct TextFormatter<W: Write> {
    writer: W,
    report_dropped: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, report_dropped: bool) -> Self {
        Self {
            writer,
            report_dropped,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &TagRecord) -> Result<()> {
        if let Some(error) = &record.error {
            writeln!(self.writer, "{}\terror: {}", record.tag, error)?;
            return Ok(());
        }

        write!(self.writer, "{}\t{}", record.tag, record.markers.join(" "))?;
        if self.report_dropped && !record.dropped.is_empty() {
            write!(self.writer, "\t(dropped: {})", record.dropped.join(" "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphtag_core::TagConverter;

    fn render(tags: &[&str], report_dropped: bool) -> String {
        let converter = TagConverter::builtin().unwrap();
        let mut formatter = TextFormatter::new(Vec::new(), report_dropped);
        for tag in tags {
            let record = TagRecord::new(tag, converter.convert_with_report(tag));
            formatter.format_record(&record).unwrap();
        }
        formatter.finish().unwrap();
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_one_line_per_tag() {
        let output = render(&["S@МН@МУЖ@ИМ@НЕОД", "PART"], false);
        assert_eq!(output, "S@МН@МУЖ@ИМ@НЕОД\tNOUN plur masc nomn inan\nPART\tPRCL\n");
    }

    #[test]
    fn test_dropped_segments_only_when_requested() {
        let tag = "V@СОВ@ИЗЪЯВ@ПРОШ@МН";
        assert!(!render(&[tag], false).contains("dropped"));
        assert!(render(&[tag], true).contains("\t(dropped: ИЗЪЯВ)"));
    }

    #[test]
    fn test_error_line() {
        let output = render(&["XYZ"], false);
        assert_eq!(output, "XYZ\terror: unknown tag 'XYZ'\n");
    }
}
