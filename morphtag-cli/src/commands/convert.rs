//! Convert command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use morphtag_core::{TagConverter, Tagset};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TagRecord, TextFormatter};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Tags to convert (reads stdin when no tags or inputs are given)
    #[arg(value_name = "TAG", conflicts_with = "input")]
    pub tags: Vec<String>,

    /// Tag list files or patterns (supports glob), one tag per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// External tagset file instead of the embedded one
    #[arg(short, long, value_name = "FILE")]
    pub tagset: Option<PathBuf>,

    /// CLI configuration file (default: ./morphtag.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show segments dropped for lack of a mapping
    #[arg(short = 'r', long)]
    pub report_dropped: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tag and markers, tab separated, one line per tag
    Text,
    /// JSON array of conversion records
    Json,
    /// Markdown table
    Markdown,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;

        let owned;
        let converter = match self.tagset.as_deref().or(config.conversion.tagset.as_deref()) {
            Some(path) => {
                owned = load_converter(path)?;
                &owned
            }
            None => TagConverter::builtin()?,
        };
        log::info!("Using tagset {}", converter.tagset_name());

        let tags = self.collect_tags()?;
        let mut formatter = self.create_formatter(format, &config)?;

        let mut failed = 0;
        for tag in &tags {
            let record = TagRecord::new(tag, converter.convert_with_report(tag));
            if let Some(error) = &record.error {
                log::warn!("{error}");
                failed += 1;
            }
            formatter.format_record(&record)?;
        }
        formatter.finish()?;

        log::info!("Converted {} of {} tags", tags.len() - failed, tags.len());

        if failed > 0 {
            return Err(CliError::ConversionFailed {
                failed,
                total: tags.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Command-line format, then config default, then text
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &config.output.default_format;
        <OutputFormat as ValueEnum>::from_str(name, true).map_err(|_| {
            anyhow::Error::from(CliError::ConfigError(format!(
                "unknown output format '{name}'"
            )))
        })
    }

    fn collect_tags(&self) -> Result<Vec<String>> {
        if !self.tags.is_empty() {
            return Ok(self.tags.clone());
        }

        if !self.input.is_empty() {
            let mut tags = Vec::new();
            for path in resolve_patterns(&self.input)? {
                log::info!("Reading {}", path.display());
                tags.extend(FileReader::read_tags(&path)?);
            }
            return Ok(tags);
        }

        log::debug!("Reading tags from stdin");
        FileReader::read_tags_from(io::stdin().lock())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        config: &CliConfig,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };

        let report_dropped = self.report_dropped || config.output.report_dropped;
        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, report_dropped)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, report_dropped)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn load_converter(path: &Path) -> Result<TagConverter> {
    let tagset = Tagset::from_file(path, None)
        .with_context(|| format!("Failed to load tagset {}", path.display()))?;
    Ok(TagConverter::new(&tagset)?)
}
