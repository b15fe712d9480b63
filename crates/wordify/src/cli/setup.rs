use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordifyapp::logging::LogFormat;
use wordifyapp::model::View;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled terminal output
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListSource {
    Favorites,
    History,
}

impl ListSource {
    pub fn view(self) -> View {
        match self {
            ListSource::Favorites => View::Favorites,
            ListSource::History => View::History,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Dark,
    Light,
    Toggle,
}

#[derive(Parser, Debug)]
#[command(
    name = "wordify",
    bin_name = "wordify",
    version,
    about = "Look up English words from the terminal",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Word to look up (same as `wordify define <WORD>`)
    #[arg(value_name = "WORD")]
    pub word: Vec<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Text, help_heading = "Options")]
    pub output: OutputMode,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Log format: text, json or pretty
    #[arg(long, global = true, default_value = "text", help_heading = "Options")]
    pub log_format: LogFormat,

    /// Data directory (overrides WORDIFY_DATA)
    #[arg(long, global = true, help_heading = "Options")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Look up a word
    #[command(alias = "d", display_order = 1)]
    Define {
        #[arg(required = true)]
        word: Vec<String>,
    },

    /// Show the word of the day
    #[command(display_order = 2)]
    Today,

    /// List favorite words
    #[command(alias = "favs", display_order = 3)]
    Favorites,

    /// Add a word to favorites, or remove it if already there
    #[command(display_order = 4)]
    Fav {
        #[arg(required = true)]
        word: Vec<String>,
    },

    /// List recent searches
    #[command(display_order = 5)]
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Look up an entry from the favorites or history list
    #[command(display_order = 6)]
    Open {
        /// List position (1 = first) or the word itself
        entry: String,

        #[arg(long, value_enum, default_value_t = ListSource::History)]
        from: ListSource,
    },

    /// Show or change the color theme
    #[command(display_order = 7)]
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeMode>,
    },

    /// Show the effective configuration
    #[command(display_order = 8)]
    Config,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum HistoryAction {
    /// Remove a word from the history
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true)]
        word: Vec<String>,
    },
    /// Remove every word from the history
    Clear,
}
