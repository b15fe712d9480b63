//! # Data Model
//!
//! [`WordRecord`] mirrors the entry shape returned by the dictionary service. Only
//! the fields wordify reads are modelled; everything else in the payload is
//! ignored, and missing sequences decode as empty so partial entries still render.
//!
//! Records are transient. They are held for the current view and never persisted;
//! only the words themselves end up in history and favorites.

use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated lookup key.
///
/// Must contain at least one non-whitespace character. The text is kept exactly
/// as typed: membership in history and favorites is case-sensitive and
/// whitespace-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn parse(input: impl Into<String>) -> Result<Self, LookupError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(LookupError::EmptyWord);
        }
        Ok(Word(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

impl WordRecord {
    /// Transcription shown under the headword: the first phonetic's text, falling
    /// back to the top-level `phonetic` field.
    pub fn display_phonetic(&self) -> Option<&str> {
        match self.phonetics.first() {
            Some(p) => p.text.as_deref().filter(|t| !t.is_empty()),
            None => self.phonetic.as_deref().filter(|t| !t.is_empty()),
        }
    }

    /// First pronunciation carrying an audio reference.
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|a| !a.is_empty())
    }

    pub fn primary_part_of_speech(&self) -> Option<&str> {
        self.meanings.first().map(|m| m.part_of_speech.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Which list the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Search,
    Favorites,
    History,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Search => write!(f, "search"),
            View::Favorites => write!(f, "favorites"),
            View::History => write!(f, "history"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "word": "serene",
        "phonetic": "/səˈɹiːn/",
        "phonetics": [
            {"text": "/səˈɹiːn/", "audio": ""},
            {"text": "/sɪˈriːn/", "audio": "https://example.test/serene-us.mp3", "license": {"name": "x"}}
        ],
        "meanings": [
            {
                "partOfSpeech": "adjective",
                "definitions": [
                    {"definition": "Without worry, stress, or disturbance.", "example": "a serene lake", "synonyms": []}
                ],
                "synonyms": ["calm", "peaceful", "tranquil"],
                "antonyms": ["agitated"]
            }
        ],
        "sourceUrls": ["https://en.wiktionary.org/wiki/serene"]
    }"#;

    #[test]
    fn word_rejects_blank_input() {
        assert_eq!(Word::parse(""), Err(LookupError::EmptyWord));
        assert_eq!(Word::parse("  \t"), Err(LookupError::EmptyWord));
    }

    #[test]
    fn word_keeps_text_as_typed() {
        let w = Word::parse(" Serene").unwrap();
        assert_eq!(w.as_str(), " Serene");
    }

    #[test]
    fn record_decodes_service_payload_and_ignores_unknown_fields() {
        let record: WordRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(record.word, "serene");
        assert_eq!(record.phonetics.len(), 2);
        assert_eq!(record.meanings[0].part_of_speech, "adjective");
        assert_eq!(
            record.meanings[0].definitions[0].example.as_deref(),
            Some("a serene lake")
        );
        assert_eq!(record.source_urls.len(), 1);
    }

    #[test]
    fn record_defaults_missing_sequences() {
        let record: WordRecord = serde_json::from_str(r#"{"word": "bare"}"#).unwrap();
        assert!(record.phonetics.is_empty());
        assert!(record.meanings.is_empty());
        assert_eq!(record.display_phonetic(), None);
        assert_eq!(record.primary_part_of_speech(), None);
    }

    #[test]
    fn audio_url_skips_empty_references() {
        let record: WordRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(
            record.audio_url(),
            Some("https://example.test/serene-us.mp3")
        );
    }

    #[test]
    fn display_phonetic_uses_first_entry() {
        let record: WordRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(record.display_phonetic(), Some("/səˈɹiːn/"));
    }
}
