//! # List Manager
//!
//! Owns the persisted [`Lists`] and keeps them in sync with a [`StorageBackend`].
//!
//! Each mutation is applied to a copy of the current lists, the affected list is
//! written in full, and only then is the copy committed. A failed write therefore
//! leaves both the stored and the in-memory value untouched.
//!
//! ## Loading
//!
//! Missing keys load as empty lists. A stored value that does not decode as a JSON
//! array of strings also loads as empty, with a warning; the corrupt value stays
//! on disk until the next mutation of that list overwrites it.

use crate::error::Result;
use crate::lists::{FavoritesList, HistoryList, ListAction, Lists};
use crate::store::{load_json, save_json, StorageBackend, Stored, FAVORITES_KEY, HISTORY_KEY};
use tracing::{debug, warn};

pub struct ListManager<S: StorageBackend> {
    store: S,
    lists: Lists,
}

impl<S: StorageBackend> ListManager<S> {
    /// Load both lists from `store`.
    pub fn load(store: S) -> Result<Self> {
        let history = HistoryList::from_stored(load_words(&store, HISTORY_KEY)?);
        let favorites = FavoritesList::from_stored(load_words(&store, FAVORITES_KEY)?);
        debug!(
            history = history.len(),
            favorites = favorites.len(),
            "loaded word lists"
        );
        Ok(Self {
            store,
            lists: Lists { history, favorites },
        })
    }

    pub fn record_successful_lookup(&mut self, word: &str) -> Result<()> {
        self.dispatch(ListAction::RecordLookup(word.to_string()))
    }

    /// Removing a word that is not present still rewrites the (unchanged) list.
    pub fn remove_from_history(&mut self, word: &str) -> Result<()> {
        self.dispatch(ListAction::RemoveFromHistory(word.to_string()))
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.dispatch(ListAction::ClearHistory)
    }

    /// Returns whether `word` is a favorite after the toggle.
    pub fn toggle_favorite(&mut self, word: &str) -> Result<bool> {
        self.dispatch(ListAction::ToggleFavorite(word.to_string()))?;
        Ok(self.lists.favorites.contains(word))
    }

    pub fn is_favorite(&self, word: &str) -> bool {
        self.lists.favorites.contains(word)
    }

    pub fn history(&self) -> &HistoryList {
        &self.lists.history
    }

    pub fn favorites(&self) -> &FavoritesList {
        &self.lists.favorites
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn dispatch(&mut self, action: ListAction) -> Result<()> {
        let next = self.lists.clone().apply(&action);
        self.sync(&action, &next)?;
        self.lists = next;
        Ok(())
    }

    fn sync(&self, action: &ListAction, next: &Lists) -> Result<()> {
        match action {
            ListAction::ClearHistory => self.store.remove(HISTORY_KEY),
            a if a.touches_history() => save_json(&self.store, HISTORY_KEY, &next.history),
            _ => save_json(&self.store, FAVORITES_KEY, &next.favorites),
        }
    }
}

fn load_words<S: StorageBackend>(store: &S, key: &str) -> Result<Vec<String>> {
    match load_json::<S, Vec<String>>(store, key)? {
        Stored::Missing => Ok(Vec::new()),
        Stored::Value(words) => Ok(words),
        Stored::Corrupt(reason) => {
            warn!(key, %reason, "ignoring unreadable stored list");
            Ok(Vec::new())
        }
    }
}
