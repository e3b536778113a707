//! Language catalogue for the transcription/translation backend.
//!
//! The backend accepts a fixed set of short codes; this module maps them to
//! the display names shown in the language dropdowns.  `Auto` (server-side
//! language detection) is a valid *source* language only — it never appears
//! in the destination dropdown.

use std::fmt;

/// Languages understood by the speech backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Server-side language detection.  Source-only.
    Auto,
    English,
    Hindi,
    Tamil,
    Telugu,
    French,
    Spanish,
    German,
    Chinese,
    Japanese,
}

impl Language {
    /// Every language, in dropdown order.  `Auto` is first.
    pub const ALL: [Language; 10] = [
        Language::Auto,
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::French,
        Language::Spanish,
        Language::German,
        Language::Chinese,
        Language::Japanese,
    ];

    /// Short code sent over the wire (`src_lang` / `dest_lang` form fields).
    pub fn code(&self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::German => "de",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
        }
    }

    /// Human-readable name for the dropdowns and result headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Auto => "Auto Detect",
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
        }
    }

    /// Choices for the source-language dropdown (includes `Auto`).
    pub fn source_options() -> &'static [Language] {
        &Self::ALL
    }

    /// Choices for the destination-language dropdown.  `Auto` is excluded —
    /// "detect the output language" is meaningless.
    pub fn dest_options() -> &'static [Language] {
        &Self::ALL[1..]
    }

    /// Parse a wire code back into a [`Language`].
    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_backend_contract() {
        assert_eq!(Language::Auto.code(), "auto");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Chinese.code(), "zh");
        assert_eq!(Language::Japanese.code(), "ja");
    }

    #[test]
    fn from_code_round_trips() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn from_code_rejects_unknown() {
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn dest_options_exclude_auto() {
        assert_eq!(Language::dest_options().len(), Language::ALL.len() - 1);
        assert!(!Language::dest_options().contains(&Language::Auto));
    }

    #[test]
    fn source_options_include_auto() {
        assert!(Language::source_options().contains(&Language::Auto));
    }

    #[test]
    fn display_uses_display_name() {
        assert_eq!(Language::Auto.to_string(), "Auto Detect");
        assert_eq!(Language::Telugu.to_string(), "Telugu");
    }
}
