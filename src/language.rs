//! Language tags and lightweight script detection for form text.
//!
//! The service speaks English and Hebrew. Detection is a simple script
//! check appropriate for National Insurance forms, which are printed in
//! one script or the other.

use serde::{Deserialize, Serialize};

/// Supported conversation/form languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

impl Language {
    /// Strict tag lookup. `None` for anything but "en"/"he".
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Self::En),
            "he" => Some(Self::He),
            _ => None,
        }
    }

    /// Tag lookup with an explicit English fallback for unknown tags.
    pub fn from_tag(tag: &str) -> Self {
        match Self::parse(tag) {
            Some(lang) => lang,
            None => {
                tracing::warn!(tag, "Unknown language tag, falling back to English");
                Self::En
            }
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::He => "he",
        }
    }

    /// The language name used in prompt instructions.
    pub fn instruction_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::He => "Hebrew",
        }
    }
}

/// Detect the language of form text by script.
///
/// Any character in the Hebrew Unicode block marks the text as Hebrew;
/// otherwise English. Scanned forms are single-script, so one letter is
/// a reliable signal.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(|c| ('\u{0590}'..='\u{05FF}').contains(&c)) {
        Language::He
    } else {
        Language::En
    }
}
