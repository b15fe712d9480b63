//! # Word Lookup
//!
//! One network request per lookup, mapped onto [`LookupError`]:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | blank word | `EmptyWord`, no request issued |
//! | HTTP 200, non-empty array | first entry |
//! | HTTP 200, empty array | `NotFound(word)` |
//! | HTTP 200, unparseable body | `Transport` |
//! | HTTP 404 | `NotFound(word)` |
//! | any other status, connection failure | `Transport` |
//!
//! There is no retry. A timeout is only applied when configured.
//!
//! - [`http::HttpLookup`]: the dictionary service over HTTP.
//! - [`mock::MockLookup`]: canned entries for tests.

use crate::error::LookupError;
use crate::model::{Word, WordRecord};
use async_trait::async_trait;

pub mod http;
pub mod mock;

pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[async_trait]
pub trait WordLookup {
    async fn lookup(&self, word: &str) -> Result<WordRecord, LookupError>;
}

/// Map a finished HTTP exchange onto a lookup result.
pub fn interpret_response(word: &Word, status: u16, body: &str) -> Result<WordRecord, LookupError> {
    match status {
        200..=299 => {
            let entries: Vec<WordRecord> = serde_json::from_str(body)
                .map_err(|e| LookupError::transport(format!("invalid response body: {}", e)))?;
            entries
                .into_iter()
                .next()
                .ok_or_else(|| LookupError::NotFound(word.to_string()))
        }
        404 => Err(LookupError::NotFound(word.to_string())),
        other => Err(LookupError::transport(format!("HTTP status {}", other))),
    }
}
