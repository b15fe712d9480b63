//! # Rendering
//!
//! Turns records, word lists and messages into styled terminal text through the
//! `outstanding` templates in `templates.rs`.
//!
//! Each public `render_*` function has an `_internal` twin taking
//! `use_color: Option<bool>`: `None` lets outstanding detect the terminal, tests
//! pass `Some(false)` to get plain text.
//!
//! Display limits applied here, not in the library:
//! - at most [`DISPLAY_LIMIT`] definitions, synonyms and antonyms per meaning
//! - list entries are truncated to [`LINE_WIDTH`] columns

use super::setup::ListSource;
use super::styles::{names, theme_for};
use super::templates::{
    CONFIG_TEMPLATE, DAILY_TEMPLATE, MESSAGES_TEMPLATE, RECORD_TEMPLATE, WORD_LIST_TEMPLATE,
};
use outstanding::{render, render_with_color, truncate_to_width, ThemeChoice};
use serde::Serialize;
use tracing::warn;
use unicode_width::UnicodeWidthStr;
use wordifyapp::commands::{CmdMessage, MessageLevel};
use wordifyapp::config::WordifyConfig;
use wordifyapp::init::WordifyPaths;
use wordifyapp::model::WordRecord;

pub const LINE_WIDTH: usize = 80;
pub const DISPLAY_LIMIT: usize = 2;
pub const FAVORITE_MARKER: &str = "★";
pub const EMPTY_FAVORITES: &str = "You haven't added any favorite words yet.";
pub const EMPTY_HISTORY: &str = "Your search history is empty.";

#[derive(Serialize)]
struct DefinitionData {
    number: String,
    text: String,
    example: Option<String>,
}

#[derive(Serialize)]
struct MeaningData {
    part_of_speech: String,
    definitions: Vec<DefinitionData>,
    synonyms: String,
    antonyms: String,
}

#[derive(Serialize)]
struct RecordData {
    word: String,
    is_favorite: bool,
    favorite_marker: String,
    phonetic: Option<String>,
    audio: Option<String>,
    origin: Option<String>,
    meanings: Vec<MeaningData>,
}

#[derive(Serialize)]
struct DailyData {
    word: String,
    part_of_speech: Option<String>,
    hint: String,
}

#[derive(Serialize)]
struct ListLineData {
    index: String,
    word: String,
}

#[derive(Serialize)]
struct WordListData {
    title: String,
    empty: bool,
    empty_message: String,
    lines: Vec<ListLineData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

fn render_themed<T: Serialize>(
    template: &str,
    data: &T,
    dark: bool,
    use_color: Option<bool>,
) -> Option<String> {
    let theme = ThemeChoice::from(theme_for(dark));
    let rendered = match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    };
    rendered
        .map_err(|e| warn!(error = %e, "template rendering failed"))
        .ok()
}

fn join_limited(words: &[String]) -> String {
    words
        .iter()
        .take(DISPLAY_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn record_data(record: &WordRecord, is_favorite: bool) -> RecordData {
    let meanings = record
        .meanings
        .iter()
        .map(|meaning| MeaningData {
            part_of_speech: meaning.part_of_speech.clone(),
            definitions: meaning
                .definitions
                .iter()
                .take(DISPLAY_LIMIT)
                .enumerate()
                .map(|(i, def)| DefinitionData {
                    number: format!("{}.", i + 1),
                    text: def.definition.clone(),
                    example: def
                        .example
                        .as_deref()
                        .filter(|e| !e.trim().is_empty())
                        .map(|e| format!("\"{}\"", e)),
                })
                .collect(),
            synonyms: join_limited(&meaning.synonyms),
            antonyms: join_limited(&meaning.antonyms),
        })
        .collect();

    RecordData {
        word: record.word.clone(),
        is_favorite,
        favorite_marker: FAVORITE_MARKER.to_string(),
        phonetic: record.display_phonetic().map(str::to_string),
        audio: record.audio_url().map(str::to_string),
        origin: record.origin.clone().filter(|o| !o.trim().is_empty()),
        meanings,
    }
}

/// Renders a full dictionary entry.
pub fn render_record(record: &WordRecord, is_favorite: bool, dark: bool) -> String {
    render_record_internal(record, is_favorite, dark, None)
}

fn render_record_internal(
    record: &WordRecord,
    is_favorite: bool,
    dark: bool,
    use_color: Option<bool>,
) -> String {
    let data = record_data(record, is_favorite);
    render_themed(RECORD_TEMPLATE, &data, dark, use_color)
        .unwrap_or_else(|| format!("{}\n", record.word))
}

pub fn render_daily(record: &WordRecord, dark: bool) -> String {
    render_daily_internal(record, dark, None)
}

fn render_daily_internal(record: &WordRecord, dark: bool, use_color: Option<bool>) -> String {
    let data = DailyData {
        word: record.word.clone(),
        part_of_speech: record
            .primary_part_of_speech()
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        hint: format!("Look it up: wordify define {}", record.word),
    };
    render_themed(DAILY_TEMPLATE, &data, dark, use_color)
        .unwrap_or_else(|| format!("Word of the Day: {}\n", record.word))
}

/// Renders a numbered list of favorites or history entries.
pub fn render_word_list(words: &[String], source: ListSource, dark: bool) -> String {
    render_word_list_internal(words, source, dark, None)
}

fn render_word_list_internal(
    words: &[String],
    source: ListSource,
    dark: bool,
    use_color: Option<bool>,
) -> String {
    let (title, empty_message) = match source {
        ListSource::Favorites => ("Favorite Words", EMPTY_FAVORITES),
        ListSource::History => ("Search History", EMPTY_HISTORY),
    };

    let lines = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let index = format!("{:>2}. ", i + 1);
            let available = LINE_WIDTH.saturating_sub(index.width());
            ListLineData {
                word: truncate_to_width(word, available),
                index,
            }
        })
        .collect();

    let data = WordListData {
        title: title.to_string(),
        empty: words.is_empty(),
        empty_message: empty_message.to_string(),
        lines,
    };
    render_themed(WORD_LIST_TEMPLATE, &data, dark, use_color).unwrap_or_else(|| {
        if words.is_empty() {
            format!("{}\n", empty_message)
        } else {
            words.iter().map(|w| format!("{}\n", w)).collect()
        }
    })
}

pub fn render_messages(messages: &[CmdMessage], dark: bool) -> String {
    render_messages_internal(messages, dark, None)
}

fn render_messages_internal(messages: &[CmdMessage], dark: bool, use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| {
                let style = match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Error => names::ERROR,
                };
                MessageData {
                    content: msg.content.clone(),
                    style: style.to_string(),
                }
            })
            .collect(),
    };

    render_themed(MESSAGES_TEMPLATE, &data, dark, use_color).unwrap_or_else(|| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_config(config: &WordifyConfig, paths: &WordifyPaths, dark: bool) -> String {
    render_config_internal(config, paths, dark, None)
}

fn render_config_internal(
    config: &WordifyConfig,
    paths: &WordifyPaths,
    dark: bool,
    use_color: Option<bool>,
) -> String {
    let entry = |key: &str, value: String| ConfigEntry {
        key: key.to_string(),
        value,
    };
    let entries = vec![
        entry("api_base_url", config.api_base_url.clone()),
        entry(
            "request_timeout_secs",
            config
                .request_timeout_secs
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string()),
        ),
        entry("log_level", config.log_level.clone()),
        entry("data_dir", paths.data.display().to_string()),
        entry("config_dir", paths.config.display().to_string()),
    ];

    let fallback: String = entries
        .iter()
        .map(|e| format!("{} = {}\n", e.key, e.value))
        .collect();
    render_themed(CONFIG_TEMPLATE, &ConfigData { entries }, dark, use_color)
        .unwrap_or(fallback)
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage], dark: bool) {
    let output = render_messages(messages, dark);
    if !output.is_empty() {
        print!("{}", output);
    }
}
