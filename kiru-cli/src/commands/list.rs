//! `list` subcommands

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use kiru_core::{EmbeddedCatalog, Language};

use crate::output::OutputFormat;

/// Print every supported language with its abbreviation source
pub fn write_languages<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Supported languages:")?;
    for language in Language::ALL {
        let abbreviations = if EmbeddedCatalog::has_own_list(language) {
            "own abbreviation list"
        } else {
            "English abbreviation list"
        };
        writeln!(
            out,
            "  {:<4} {:<12} {}",
            language.code(),
            language.name(),
            abbreviations
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Unknown codes fall back to the generic rules.")?;
    Ok(())
}

/// Print the output formats accepted by `--format`
pub fn write_formats<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Available output formats:")?;
    for format in OutputFormat::value_variants() {
        if let Some(value) = format.to_possible_value() {
            let help = value.get_help().map(ToString::to_string).unwrap_or_default();
            writeln!(out, "  {:<10} {}", value.get_name(), help)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(write: fn(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_languages_listing() {
        let listing = render(write_languages);

        assert!(listing.contains("en"));
        assert!(listing.contains("Japanese"));
        assert!(listing.contains("Amharic"));
        assert!(listing.lines().any(|line| line.contains("German") && line.contains("own")));
        assert!(listing.lines().any(|line| line.contains("Hindi") && line.contains("English")));
        assert_eq!(
            listing.lines().filter(|line| line.starts_with("  ")).count(),
            Language::ALL.len()
        );
    }

    #[test]
    fn test_formats_listing() {
        let listing = render(write_formats);
        for name in ["text", "json", "markdown"] {
            assert!(listing.contains(name), "missing {name}");
        }
    }
}
