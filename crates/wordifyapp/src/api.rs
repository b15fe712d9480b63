//! # API Facade
//!
//! [`WordifyApi`] is the single entry point for every wordify operation,
//! whatever UI drives it. It owns the session state (current view, displayed
//! record, inline error, pending flag) and delegates to the lower layers:
//!
//! - Lookups go through a [`WordLookup`].
//! - History and favorites go through the [`ListManager`].
//! - The theme goes through [`ThemePreference`].
//!
//! It returns [`CmdResult`]s and never prints.
//!
//! ## Searches
//!
//! A search is split into [`WordifyApi::begin_search`] and
//! [`WordifyApi::complete_search`] so that a UI can keep several requests in
//! flight. Each `begin_search` hands out a [`SearchTicket`] with a fresh token,
//! and `complete_search` drops any ticket that is not the latest. The last search
//! started is the one that ends up displayed, whatever order responses arrive in.
//! [`WordifyApi::search`] runs both halves back to back.
//!
//! A successful lookup records the word as typed at the front of the history. A
//! failed lookup clears the displayed record and sets the inline error, which
//! stays until dismissed or replaced by the next search.
//!
//! ## Generic Over Storage and Lookup
//!
//! - Production: `WordifyApi<FsBackend, HttpLookup>`
//! - Testing: `WordifyApi<MemBackend, MockLookup>`

use crate::commands::{CmdMessage, CmdResult};
use crate::daily;
use crate::error::{LookupError, Result};
use crate::lookup::WordLookup;
use crate::manager::ListManager;
use crate::model::{View, Word, WordRecord};
use crate::store::StorageBackend;
use crate::theme::ThemePreference;
use chrono::NaiveDate;
use tracing::{debug, info};

pub const FAVORITE_ADDED: &str = "Added to favorites";
pub const FAVORITE_REMOVED: &str = "Removed from favorites";

/// Session state shown by the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub view: View,
    pub record: Option<WordRecord>,
    pub error: Option<String>,
    pub pending: bool,
    latest_token: u64,
}

/// Handle for one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    token: u64,
    word: Word,
}

impl SearchTicket {
    pub fn word(&self) -> &Word {
        &self.word
    }
}

/// What happened to a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Displayed,
    Failed(LookupError),
    /// A newer search was started; the response was dropped.
    Stale,
}

pub struct WordifyApi<S: StorageBackend, L: WordLookup> {
    lists: ListManager<S>,
    theme: ThemePreference,
    lookup: L,
    state: AppState,
}

impl<S: StorageBackend, L: WordLookup> WordifyApi<S, L> {
    /// Load lists and theme from `store`. `theme_hint` is only consulted when no
    /// theme preference is stored.
    pub fn new<F: FnOnce() -> bool>(store: S, lookup: L, theme_hint: F) -> Result<Self> {
        let theme = ThemePreference::load(&store, theme_hint)?;
        let lists = ListManager::load(store)?;
        Ok(Self {
            lists,
            theme,
            lookup,
            state: AppState::default(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn lookup_service(&self) -> &L {
        &self.lookup
    }

    // --- Searching ---

    /// Validate `input` and mark a search as pending. The previous record and
    /// error stay visible until the search completes.
    pub fn begin_search(&mut self, input: &str) -> std::result::Result<SearchTicket, LookupError> {
        let word = Word::parse(input)?;
        self.state.latest_token += 1;
        self.state.pending = true;
        debug!(%word, token = self.state.latest_token, "search started");
        Ok(SearchTicket {
            token: self.state.latest_token,
            word,
        })
    }

    /// Apply a lookup result, unless a newer search has been started since.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: std::result::Result<WordRecord, LookupError>,
    ) -> Result<SearchOutcome> {
        if ticket.token != self.state.latest_token {
            debug!(word = %ticket.word, token = ticket.token, "discarding stale response");
            return Ok(SearchOutcome::Stale);
        }
        self.state.pending = false;

        match result {
            Ok(record) => {
                self.state.record = Some(record);
                self.state.error = None;
                self.lists.record_successful_lookup(ticket.word.as_str())?;
                info!(word = %ticket.word, "displaying definition");
                Ok(SearchOutcome::Displayed)
            }
            Err(error) => {
                self.state.record = None;
                self.state.error = Some(error.to_string());
                info!(word = %ticket.word, %error, "search failed");
                Ok(SearchOutcome::Failed(error))
            }
        }
    }

    /// Look `input` up and display the result.
    ///
    /// A blank word is rejected without a request and without touching the
    /// displayed state. Lookup failures are reported in the result, not as `Err`;
    /// `Err` means a history write failed.
    pub async fn search(&mut self, input: &str) -> Result<CmdResult> {
        let ticket = match self.begin_search(input) {
            Ok(ticket) => ticket,
            Err(error) => return Ok(CmdResult::default().with_lookup_error(error)),
        };
        let response = self.lookup.lookup(ticket.word.as_str()).await;
        let typed = ticket.word.as_str().to_string();

        let result = match self.complete_search(ticket, response)? {
            SearchOutcome::Displayed => match &self.state.record {
                Some(record) => CmdResult::default().with_record(record.clone()),
                None => CmdResult::default(),
            },
            SearchOutcome::Failed(error) => CmdResult::default().with_lookup_error(error),
            SearchOutcome::Stale => CmdResult::default(),
        };
        // Membership follows the headword of what is shown, not the typed input.
        let headword = result.record.as_ref().map_or(typed.as_str(), |r| r.word.as_str());
        let is_favorite = self.lists.is_favorite(headword);
        Ok(CmdResult {
            is_favorite: Some(is_favorite),
            ..result.with_view(self.state.view)
        })
    }

    /// Switch to the search view and look `word` up.
    pub async fn open_word(&mut self, word: &str) -> Result<CmdResult> {
        self.state.view = View::Search;
        self.search(word).await
    }

    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }

    // --- Views ---

    pub fn select_view(&mut self, view: View) -> CmdResult {
        self.state.view = view;
        CmdResult::default().with_view(view)
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    // --- Word of the day ---

    /// Look up the word of the day for `date`. Any failure yields `None`; the
    /// session state is never touched.
    pub async fn word_of_the_day(&self, date: NaiveDate) -> Option<WordRecord> {
        let word = daily::word_of_the_day(date);
        match self.lookup.lookup(word).await {
            Ok(record) => Some(record),
            Err(error) => {
                debug!(word, %error, "word of the day unavailable");
                None
            }
        }
    }

    // --- History ---

    pub fn history(&self) -> CmdResult {
        CmdResult::default().with_words(self.lists.history().words().to_vec())
    }

    pub fn remove_from_history(&mut self, word: &str) -> Result<CmdResult> {
        let present = self.lists.history().contains(word);
        self.lists.remove_from_history(word)?;
        let mut result = self.history();
        if present {
            result.add_message(CmdMessage::success(format!("Removed \"{}\" from history", word)));
        } else {
            result.add_message(CmdMessage::info(format!("\"{}\" is not in your history", word)));
        }
        Ok(result)
    }

    pub fn clear_history(&mut self) -> Result<CmdResult> {
        self.lists.clear_history()?;
        let mut result = self.history();
        result.add_message(CmdMessage::success("Search history cleared"));
        Ok(result)
    }

    // --- Favorites ---

    pub fn favorites(&self) -> CmdResult {
        CmdResult::default().with_words(self.lists.favorites().words().to_vec())
    }

    pub fn is_favorite(&self, word: &str) -> bool {
        self.lists.is_favorite(word)
    }

    pub fn toggle_favorite(&mut self, word: &str) -> Result<CmdResult> {
        let added = self.lists.toggle_favorite(word)?;
        let mut result = CmdResult {
            is_favorite: Some(added),
            ..self.favorites()
        };
        result.add_message(CmdMessage::success(if added {
            FAVORITE_ADDED
        } else {
            FAVORITE_REMOVED
        }));
        Ok(result)
    }

    /// Whether the displayed record's word is a favorite. False with nothing displayed.
    pub fn is_current_favorite(&self) -> bool {
        self.state
            .record
            .as_ref()
            .is_some_and(|record| self.lists.is_favorite(&record.word))
    }

    /// Toggle the displayed record's word. With nothing displayed this is a no-op.
    pub fn toggle_current_favorite(&mut self) -> Result<CmdResult> {
        match self.state.record.as_ref().map(|r| r.word.clone()) {
            Some(word) => self.toggle_favorite(&word),
            None => Ok(CmdResult::default()),
        }
    }

    // --- Theme ---

    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn set_dark_mode(&mut self, dark: bool) -> Result<CmdResult> {
        self.theme.set(self.lists.store(), dark)?;
        Ok(CmdResult {
            dark_mode: Some(dark),
            ..Default::default()
        })
    }

    pub fn toggle_theme(&mut self) -> Result<CmdResult> {
        let dark = self.theme.toggle(self.lists.store())?;
        Ok(CmdResult {
            dark_mode: Some(dark),
            ..Default::default()
        })
    }
}
