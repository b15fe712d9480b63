//! # Word Lists
//!
//! Pure list bookkeeping for search history and favorites. Nothing here touches
//! storage: every operation is a plain state transition, and
//! [`ListManager`](crate::manager::ListManager) is responsible for persisting the
//! result.
//!
//! ## History
//!
//! Most-recent-first, no duplicates, capped at [`HISTORY_LIMIT`]. Recording a word
//! that is already present promotes it to the front instead of duplicating it, so
//! recording the same word twice leaves the list unchanged.
//!
//! ## Favorites
//!
//! A set that remembers insertion order for display. Toggling adds to the end when
//! absent and removes when present, so toggling twice is a no-op.

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the search history.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList(Vec<String>);

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, dropping duplicates (first occurrence wins) and
    /// anything past the cap.
    pub fn from_stored(entries: Vec<String>) -> Self {
        let mut words: Vec<String> = Vec::with_capacity(entries.len().min(HISTORY_LIMIT));
        for entry in entries {
            if words.len() == HISTORY_LIMIT {
                break;
            }
            if !words.contains(&entry) {
                words.push(entry);
            }
        }
        Self(words)
    }

    pub fn record(&mut self, word: &str) {
        self.0.retain(|w| w != word);
        self.0.insert(0, word.to_string());
        self.0.truncate(HISTORY_LIMIT);
    }

    pub fn remove(&mut self, word: &str) {
        self.0.retain(|w| w != word);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesList(Vec<String>);

impl FavoritesList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, dropping duplicates (first occurrence wins).
    pub fn from_stored(entries: Vec<String>) -> Self {
        let mut words: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !words.contains(&entry) {
                words.push(entry);
            }
        }
        Self(words)
    }

    /// Returns the new membership state.
    pub fn toggle(&mut self, word: &str) -> bool {
        if self.contains(word) {
            self.0.retain(|w| w != word);
            false
        } else {
            self.0.push(word.to_string());
            true
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A mutation of the persisted lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    RecordLookup(String),
    RemoveFromHistory(String),
    ClearHistory,
    ToggleFavorite(String),
}

impl ListAction {
    /// Whether the action changes history (otherwise it changes favorites).
    pub fn touches_history(&self) -> bool {
        !matches!(self, ListAction::ToggleFavorite(_))
    }
}

/// Both persisted lists, as one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lists {
    pub history: HistoryList,
    pub favorites: FavoritesList,
}

impl Lists {
    /// Old state + action -> new state.
    pub fn apply(mut self, action: &ListAction) -> Self {
        match action {
            ListAction::RecordLookup(word) => self.history.record(word),
            ListAction::RemoveFromHistory(word) => self.history.remove(word),
            ListAction::ClearHistory => self.history.clear(),
            ListAction::ToggleFavorite(word) => {
                self.favorites.toggle(word);
            }
        }
        self
    }
}
