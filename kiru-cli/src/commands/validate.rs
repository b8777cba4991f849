//! Validate command implementation

use anyhow::Result;
use clap::Args;
use kiru_core::{AbbreviationKind, AbbreviationSet, Language};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the abbreviation catalog to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub catalog: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating abbreviation catalog: {}", self.catalog.display());

        match AbbreviationSet::from_file(&self.catalog) {
            Ok(set) => {
                println!("✓ Catalog is valid!");
                println!("  Language code: {}", set.code());
                println!("  Language name: {}", set.name());
                println!("  Ordinary: {}", set.of_kind(AbbreviationKind::Ordinary).count());
                println!("  Prefix:   {}", set.of_kind(AbbreviationKind::Prefix).count());
                println!("  Number:   {}", set.of_kind(AbbreviationKind::Number).count());
                if Language::from_code(set.code()) == Language::Generic {
                    println!(
                        "  Note: '{}' is not a supported language; the catalog applies to the generic rules",
                        set.code()
                    );
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Catalog is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_valid_catalog() {
        let file = catalog_file(
            r#"
[metadata]
code = "en"
name = "Ship ranks"

[abbreviations]
prefix = ["cdt", "lt.cdr"]
number = ["no"]
"#,
        );

        let args = ValidateArgs {
            catalog: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_rejects_trailing_period() {
        let file = catalog_file(
            r#"
[metadata]
code = "en"
name = "Broken"

[abbreviations]
ordinary = ["etc."]
"#,
        );

        let args = ValidateArgs {
            catalog: file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_validate_rejects_malformed_toml() {
        let file = catalog_file("[metadata\ncode = \"en\"\n");

        let args = ValidateArgs {
            catalog: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }
}
