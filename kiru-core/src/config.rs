//! Segmenter configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::language::Language;

/// Segmentation settings for one [`Segmenter`](crate::Segmenter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    pub(crate) language: Language,
    pub(crate) doc_type: Option<String>,
    pub(crate) clean: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            doc_type: None,
            clean: true,
        }
    }
}

impl SegmenterConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Document type hint passed to the cleaner (`"pdf"` unwraps hard line breaks)
    pub fn doc_type(&self) -> Option<&str> {
        self.doc_type.as_deref()
    }

    /// Whether the text is normalised before segmentation
    pub fn clean(&self) -> bool {
        self.clean
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(doc_type) = &self.doc_type {
            if doc_type.is_empty() {
                return Err(Error::Configuration("doc_type must not be empty".into()));
            }
            if !doc_type.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
                return Err(Error::Configuration(format!(
                    "doc_type '{doc_type}' may only contain ASCII letters, digits, '_' and '-'"
                )));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`SegmenterConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<Language>,
    doc_type: Option<String>,
    clean: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code; unknown codes select the generic rules
    pub fn language(mut self, code: &str) -> Self {
        self.language = Some(Language::from_code(code));
        self
    }

    pub fn language_of(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Enable or disable text normalisation (enabled by default)
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = Some(clean);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SegmenterConfig> {
        let mut config = SegmenterConfig::default();

        if let Some(language) = self.language {
            config.language = language;
        }
        if self.doc_type.is_some() {
            config.doc_type = self.doc_type;
        }
        if let Some(clean) = self.clean {
            config.clean = clean;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SegmenterConfig::default();
        assert_eq!(config.language(), Language::English);
        assert_eq!(config.doc_type(), None);
        assert!(config.clean());
    }

    #[test]
    fn test_builder() {
        let config = SegmenterConfig::builder()
            .language("de")
            .doc_type("pdf")
            .clean(false)
            .build()
            .unwrap();

        assert_eq!(config.language(), Language::German);
        assert_eq!(config.doc_type(), Some("pdf"));
        assert!(!config.clean());
    }

    #[test]
    fn test_unknown_language_is_generic() {
        let config = SegmenterConfig::builder().language("xx").build().unwrap();
        assert_eq!(config.language(), Language::Generic);
    }

    #[test]
    fn test_invalid_doc_type() {
        assert!(SegmenterConfig::builder().doc_type("").build().is_err());
        assert!(SegmenterConfig::builder().doc_type("p d f").build().is_err());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: SegmenterConfig =
            toml::from_str("language = \"fr\"\nclean = false\n").unwrap();
        assert_eq!(config.language(), Language::French);
        assert!(!config.clean());
        assert_eq!(config.doc_type(), None);
    }
}
