//! # CLI Templates
//!
//! Output is rendered through `outstanding` (minijinja) templates kept in
//! `templates/` and embedded at compile time.
//!
//! Line breaks in the templates are literal: every output line ends where the
//! template line ends, and block tags sit at the start or end of a line so that
//! they do not add blank lines of their own. Layout math (numbering, truncation,
//! joining) happens in `render.rs`; templates only choose styles.

pub const RECORD_TEMPLATE: &str = include_str!("templates/record.tmp");
pub const DAILY_TEMPLATE: &str = include_str!("templates/daily.tmp");
pub const WORD_LIST_TEMPLATE: &str = include_str!("templates/word_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
