//! Generate catalog command implementation

use anyhow::{Context, Result};
use clap::Args;
use kiru_core::Language;
use std::path::PathBuf;

/// Arguments for the generate-catalog command
#[derive(Debug, Args)]
pub struct GenerateCatalogArgs {
    /// Language code the catalog is for
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateCatalogArgs {
    /// Execute the generate-catalog command
    pub fn execute(&self) -> Result<()> {
        println!("Generating abbreviation catalog template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, self.template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Catalog template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add your abbreviations to the lists");
        println!("2. Validate the catalog:");
        println!("   kiru validate --catalog {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   kiru process -i input.txt -l {} --abbreviations {}",
            self.language_code,
            self.output.display()
        );

        Ok(())
    }

    /// Template catalog content
    fn template(&self) -> String {
        let language = Language::from_code(&self.language_code);
        let name = match language {
            Language::Generic => "Custom Language",
            known => known.name(),
        };

        format!(
            r#"# Abbreviation catalog for {code}
#
# Entries are matched case-insensitively and written without their final
# period. Inner periods stay: "e.g", "ph.d".

[metadata]
code = "{code}"
name = "{name}"

[abbreviations]
# Ends a sentence only when the next word is capitalised
ordinary = ["etc", "approx"]

# Titles, never the end of a sentence when followed by a space ("Dr. Smith")
prefix = ["dr", "prof"]

# Kept before a number or an opening parenthesis ("No. 5", "pp. (12)")
number = ["no", "pp"]
"#,
            code = self.language_code,
            name = name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiru_core::{AbbreviationKind, AbbreviationSet};
    use tempfile::TempDir;

    #[test]
    fn test_template_is_a_valid_catalog() {
        let args = GenerateCatalogArgs {
            language_code: "sv".to_string(),
            output: PathBuf::from("unused.toml"),
        };

        let set = AbbreviationSet::from_toml_str(&args.template()).unwrap();
        assert_eq!(set.code(), "sv");
        assert_eq!(set.name(), "Custom Language");
        assert!(set.is_prefix("dr"));
        assert!(set.is_number("no"));
        assert_eq!(set.kind_of("etc"), Some(AbbreviationKind::Ordinary));
    }

    #[test]
    fn test_template_names_known_language() {
        let args = GenerateCatalogArgs {
            language_code: "de".to_string(),
            output: PathBuf::from("unused.toml"),
        };
        assert!(args.template().contains("name = \"German\""));
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("catalog.toml");
        let args = GenerateCatalogArgs {
            language_code: "en".to_string(),
            output: output.clone(),
        };

        args.execute().unwrap();

        assert!(AbbreviationSet::from_file(&output).is_ok());
    }
}
