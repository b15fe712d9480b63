use super::{interpret_response, WordLookup, DEFAULT_BASE_URL};
use crate::error::LookupError;
use crate::model::{Word, WordRecord};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Looks words up against the dictionary service.
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for HttpLookup {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HttpLookup {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The entry URL for `word`, with the word percent-encoded.
    pub fn entry_url(&self, word: &Word) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(word.as_str())
        )
    }
}

#[async_trait]
impl WordLookup for HttpLookup {
    async fn lookup(&self, word: &str) -> Result<WordRecord, LookupError> {
        let word = Word::parse(word)?;
        let url = self.entry_url(&word);
        debug!(%url, "looking up word");

        let mut request = self.client.get(&url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "lookup request failed");
            LookupError::transport(format!("request failed: {}", e))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, status, "could not read lookup response");
            LookupError::transport(format!("failed to read response: {}", e))
        })?;

        let result = interpret_response(&word, status, &body);
        match &result {
            Ok(record) => debug!(word = %record.word, meanings = record.meanings.len(), "lookup succeeded"),
            Err(LookupError::Transport { reason }) => warn!(%reason, status, "lookup failed"),
            Err(e) => debug!(error = %e, status, "lookup returned no entry"),
        }
        result
    }
}
