//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use morphtag_core::tagset::embedded_source;
use morphtag_core::DEFAULT_TAGSET;
use std::fs;
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Name of the new tagset
    #[arg(short, long, value_name = "NAME", required = true)]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating tagset configuration template...");
        println!("  Tagset name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the vocabulary and mapping tables");
        println!("2. Validate your configuration:");
        println!("   morphtag validate --tagset {}", self.output.display());
        println!("3. Use it for conversion:");
        println!(
            "   morphtag convert --tagset {} 'S@ЕД@МУЖ@ИМ@ОД'",
            self.output.display()
        );

        Ok(())
    }

    /// The embedded tagset, renamed
    fn generate_template(&self) -> Result<String> {
        let name = self.name.trim();
        if name.is_empty() || name.contains(['"', '\\', '\n']) {
            return Err(CliError::ConfigError(format!("invalid tagset name '{}'", self.name)).into());
        }

        let source = embedded_source(DEFAULT_TAGSET)
            .ok_or_else(|| CliError::ConfigError("embedded tagset missing".to_string()))?;

        Ok(format!(
            "# Tagset configuration for {name}, derived from {DEFAULT_TAGSET}\n\n{}",
            source.replacen(
                &format!("name = \"{DEFAULT_TAGSET}\""),
                &format!("name = \"{name}\""),
                1
            )
        ))
    }
}
