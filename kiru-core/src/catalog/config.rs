//! TOML schema for abbreviation catalogs

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub metadata: Metadata,
    pub abbreviations: Abbreviations,
}

/// Catalog metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Abbreviation lists by category
///
/// Entries are written without their trailing period; inner periods stay
/// (`"e.g"`, `"ph.d"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(default)]
    pub ordinary: Vec<String>,
    #[serde(default)]
    pub prefix: Vec<String>,
    #[serde(default)]
    pub number: Vec<String>,
}

impl CatalogConfig {
    /// Parse a catalog document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: CatalogConfig =
            toml::from_str(source).map_err(|e| Error::CatalogParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::Configuration("catalog has an empty language code".to_string()));
        }

        let lists = [
            ("ordinary", &self.abbreviations.ordinary),
            ("prefix", &self.abbreviations.prefix),
            ("number", &self.abbreviations.number),
        ];

        if lists.iter().all(|(_, entries)| entries.is_empty()) {
            return Err(Error::Configuration(format!(
                "catalog '{}' defines no abbreviations",
                self.metadata.code
            )));
        }

        for (category, entries) in lists {
            for entry in entries.iter() {
                let trimmed = entry.trim();
                if trimmed.is_empty() {
                    return Err(Error::Configuration(format!(
                        "empty {category} abbreviation in catalog '{}'",
                        self.metadata.code
                    )));
                }
                if trimmed.ends_with('.') {
                    return Err(Error::Configuration(format!(
                        "{category} abbreviation '{trimmed}' must not end with a period"
                    )));
                }
                if trimmed.chars().any(char::is_whitespace) {
                    return Err(Error::Configuration(format!(
                        "{category} abbreviation '{trimmed}' contains whitespace"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[metadata]
code = "xx"
name = "Sample"

[abbreviations]
ordinary = ["etc"]
prefix = ["dr"]
"#;

    #[test]
    fn test_parse_with_missing_category() {
        let config = CatalogConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.metadata.code, "xx");
        assert_eq!(config.abbreviations.prefix, vec!["dr"]);
        assert!(config.abbreviations.number.is_empty());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = CatalogConfig::from_toml_str("[metadata\ncode=").unwrap_err();
        assert!(matches!(err, Error::CatalogParse(_)));
    }

    #[test]
    fn test_rejects_trailing_period() {
        let source = SAMPLE.replace("\"etc\"", "\"etc.\"");
        let err = CatalogConfig::from_toml_str(&source).unwrap_err();
        assert!(err.to_string().contains("must not end with a period"));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let source = "[metadata]\ncode = \"xx\"\nname = \"Empty\"\n[abbreviations]\n";
        let err = CatalogConfig::from_toml_str(source).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
