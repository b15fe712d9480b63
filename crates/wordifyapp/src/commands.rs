//! # Command Results
//!
//! Every controller operation returns a [`CmdResult`] rather than text. The
//! result carries whatever the operation produced (a record, a list of words, a
//! membership flag) plus structured messages with a level. The UI layer decides
//! how to render them.

use crate::error::LookupError;
use crate::model::{View, WordRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Record to display, if the operation produced one.
    pub record: Option<WordRecord>,
    /// Words to display (history or favorites).
    pub words: Vec<String>,
    /// Favorite membership of the word the operation was about.
    pub is_favorite: Option<bool>,
    pub dark_mode: Option<bool>,
    pub view: Option<View>,
    /// Set when a lookup failed; the matching error message is in `messages`.
    #[serde(skip)]
    pub lookup_error: Option<LookupError>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_record(mut self, record: WordRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_words(mut self, words: Vec<String>) -> Self {
        self.words = words;
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    /// Records a failed lookup and its user-facing message.
    pub fn with_lookup_error(mut self, error: LookupError) -> Self {
        self.messages.push(CmdMessage::error(error.to_string()));
        self.lookup_error = Some(error);
        self
    }

    pub fn failed(&self) -> bool {
        self.lookup_error.is_some()
    }
}
