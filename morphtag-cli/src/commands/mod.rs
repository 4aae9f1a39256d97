//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use morphtag_core::{get_tagset, list_available_tagsets, TagConverter};

pub mod convert;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert SynTagRus tags into OpenCorpora markers
    Convert(convert::ConvertArgs),

    /// Validate a tagset configuration file
    Validate(validate::ValidateArgs),

    /// Generate a tagset configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded tagsets
    Tagsets,

    /// List POS families in classification order
    Families,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Tagsets => {
                println!("Available tagsets:");
                for name in list_available_tagsets() {
                    let tagset = get_tagset(name)?;
                    println!("  {:<24} {}", name, tagset.description());
                }
            }
            ListCommands::Families => {
                let converter = TagConverter::builtin()?;
                println!("POS families (first match wins):");
                for rule in converter.classifier().rules() {
                    println!(
                        "  {:<18} {}",
                        rule.family.name(),
                        rule.pattern.tokens().join(" .. ")
                    );
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      - tag and markers, tab separated");
                println!("  json      - JSON array of conversion records");
                println!("  markdown  - Markdown table");
            }
        }
        Ok(())
    }
}
