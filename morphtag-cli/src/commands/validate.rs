//! Validate command implementation

use anyhow::Result;
use clap::Args;
use morphtag_core::{TagConverter, Tagset};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the tagset configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub tagset: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating tagset configuration: {}", self.tagset.display());

        // Building the converter also compiles every classification pattern
        let result =
            Tagset::from_file(&self.tagset, None).and_then(|tagset| TagConverter::new(&tagset));

        match result {
            Ok(converter) => {
                println!("✓ Configuration is valid!");
                println!("  Tagset name: {}", converter.tagset_name());
                println!("  Delimiter: {}", converter.delimiter());
                println!("  Mapped grammemes: {}", converter.mapping().len());
                println!(
                    "  Classification rules: {}",
                    converter.classifier().rules().len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
