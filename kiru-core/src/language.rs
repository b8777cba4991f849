//! Supported languages and their rule switches

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages with a registered rule set
///
/// Codes that match no variant resolve to [`Language::Generic`], which uses
/// the Latin punctuation inventory and the default abbreviation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    /// English, also the default abbreviation catalog
    #[default]
    English,
    Amharic,
    Arabic,
    Armenian,
    Burmese,
    Chinese,
    Danish,
    Dutch,
    French,
    German,
    Greek,
    Hindi,
    Italian,
    Japanese,
    Persian,
    Polish,
    Russian,
    Spanish,
    Urdu,
    /// Fallback for unregistered codes
    Generic,
}

/// How catalog abbreviations are disambiguated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AbbreviationPolicy {
    /// Category rules plus the capitalised-follower check
    Contextual,
    /// Ordinary abbreviations masked at word start without lookahead
    WordStart,
    /// Masked whenever followed by whitespace
    BeforeWhitespace,
    /// Masked unconditionally
    Unconditional,
}

impl Language {
    /// Every registered language, `Generic` excluded
    pub const ALL: [Language; 19] = [
        Language::English,
        Language::Amharic,
        Language::Arabic,
        Language::Armenian,
        Language::Burmese,
        Language::Chinese,
        Language::Danish,
        Language::Dutch,
        Language::French,
        Language::German,
        Language::Greek,
        Language::Hindi,
        Language::Italian,
        Language::Japanese,
        Language::Persian,
        Language::Polish,
        Language::Russian,
        Language::Spanish,
        Language::Urdu,
    ];

    /// Resolve an ISO 639-1 code (or English language name)
    ///
    /// Region subtags are ignored, so `en-US` and `pt_BR` resolve on their
    /// primary subtag.
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match primary.as_str() {
            "en" | "english" => Language::English,
            "am" | "amharic" => Language::Amharic,
            "ar" | "arabic" => Language::Arabic,
            "hy" | "armenian" => Language::Armenian,
            "my" | "burmese" => Language::Burmese,
            "zh" | "chinese" => Language::Chinese,
            "da" | "danish" => Language::Danish,
            "nl" | "dutch" => Language::Dutch,
            "fr" | "french" => Language::French,
            "de" | "german" => Language::German,
            "el" | "greek" => Language::Greek,
            "hi" | "hindi" => Language::Hindi,
            "it" | "italian" => Language::Italian,
            "ja" | "japanese" => Language::Japanese,
            "fa" | "persian" => Language::Persian,
            "pl" | "polish" => Language::Polish,
            "ru" | "russian" => Language::Russian,
            "es" | "spanish" => Language::Spanish,
            "ur" | "urdu" => Language::Urdu,
            _ => Language::Generic,
        }
    }

    /// ISO 639-1 code (`und` for the generic fallback)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Amharic => "am",
            Language::Arabic => "ar",
            Language::Armenian => "hy",
            Language::Burmese => "my",
            Language::Chinese => "zh",
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::French => "fr",
            Language::German => "de",
            Language::Greek => "el",
            Language::Hindi => "hi",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Persian => "fa",
            Language::Polish => "pl",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Urdu => "ur",
            Language::Generic => "und",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Amharic => "Amharic",
            Language::Arabic => "Arabic",
            Language::Armenian => "Armenian",
            Language::Burmese => "Burmese",
            Language::Chinese => "Chinese",
            Language::Danish => "Danish",
            Language::Dutch => "Dutch",
            Language::French => "French",
            Language::German => "German",
            Language::Greek => "Greek",
            Language::Hindi => "Hindi",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Persian => "Persian",
            Language::Polish => "Polish",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Urdu => "Urdu",
            Language::Generic => "Generic",
        }
    }

    pub(crate) fn abbreviation_policy(&self) -> AbbreviationPolicy {
        match self {
            Language::German => AbbreviationPolicy::BeforeWhitespace,
            Language::Arabic | Language::Persian => AbbreviationPolicy::Unconditional,
            Language::Russian => AbbreviationPolicy::WordStart,
            _ => AbbreviationPolicy::Contextual,
        }
    }

    /// Single lowercase letters followed by a period are abbreviations ("z. B.")
    pub(crate) fn masks_lowercase_initials(&self) -> bool {
        matches!(self, Language::German)
    }

    /// Ordinal numbers are written with a trailing period ("3. Mai")
    pub(crate) fn masks_ordinal_periods(&self) -> bool {
        matches!(self, Language::German)
    }

    /// Quotations open with a low mark (`„` or `,,`) and close with `“`
    pub(crate) fn uses_low_opening_quotes(&self) -> bool {
        matches!(self, Language::German)
    }

    /// Lines lacking final punctuation get an explicit end-of-line marker
    pub(crate) fn appends_end_marker(&self) -> bool {
        !self.rewrites_list_punctuation()
    }

    /// Time colons and mid-list commas are masked before scanning
    pub(crate) fn rewrites_list_punctuation(&self) -> bool {
        matches!(self, Language::Arabic | Language::Persian)
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::from_code(s))
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language::from_code(&code)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
