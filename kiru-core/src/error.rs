//! Error types for sentence segmentation

use thiserror::Error;

/// Errors raised by the segmenter and the abbreviation catalog
#[derive(Debug, Error)]
pub enum Error {
    /// Input contains one of the reserved placeholder characters
    #[error("reserved character {character:?} at offset {offset}")]
    ReservedCharacter {
        /// The offending character
        character: char,
        /// Character index in the input text
        offset: usize,
    },

    /// Invalid configuration or catalog contents
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog file could not be parsed
    #[error("Failed to parse abbreviation catalog: {0}")]
    CatalogParse(String),

    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_character_display() {
        let error = Error::ReservedCharacter {
            character: '∯',
            offset: 3,
        };
        assert_eq!(
            error.to_string(),
            "reserved character '∯' at offset 3"
        );
    }

    #[test]
    fn test_configuration_display() {
        let error = Error::Configuration("empty catalog".into());
        assert_eq!(error.to_string(), "Configuration error: empty catalog");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("missing"));
    }
}
