use super::WordLookup;
use crate::error::LookupError;
use crate::model::{Meaning, Word, WordRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory lookup for tests.
///
/// Words registered with [`MockLookup::with_entry`] resolve to their record,
/// words registered with [`MockLookup::with_failure`] resolve to that error, and
/// everything else is `NotFound`. Every request that would have reached the
/// network is recorded.
#[derive(Default)]
pub struct MockLookup {
    responses: HashMap<String, Result<WordRecord, LookupError>>,
    calls: Mutex<Vec<String>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, record: WordRecord) -> Self {
        let word = record.word.clone();
        self.with_response(&word, record)
    }

    /// Answers lookups of `typed` with `record`, whose headword may differ.
    pub fn with_response(mut self, typed: &str, record: WordRecord) -> Self {
        self.responses.insert(typed.to_string(), Ok(record));
        self
    }

    /// Registers a minimal record with one meaning of the given part of speech.
    pub fn with_word(self, word: &str, part_of_speech: &str) -> Self {
        self.with_entry(sample_record(word, part_of_speech))
    }

    pub fn with_failure(mut self, word: &str, error: LookupError) -> Self {
        self.responses.insert(word.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl WordLookup for MockLookup {
    async fn lookup(&self, word: &str) -> Result<WordRecord, LookupError> {
        let word = Word::parse(word)?;
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(word.to_string());
        }
        self.responses
            .get(word.as_str())
            .cloned()
            .unwrap_or_else(|| Err(LookupError::NotFound(word.into_string())))
    }
}

pub fn sample_record(word: &str, part_of_speech: &str) -> WordRecord {
    WordRecord {
        word: word.to_string(),
        meanings: vec![Meaning {
            part_of_speech: part_of_speech.to_string(),
            ..Default::default()
        }],
        ..Default::default()
    }
}
