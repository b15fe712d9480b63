//! # CLI Layer
//!
//! The only place that knows about stdout, stderr and exit codes.
//!
//! 1. Parse arguments (`setup.rs`).
//! 2. Resolve directories, load configuration, start logging.
//! 3. Build the API context and call the matching `WordifyApi` method.
//! 4. Render the `CmdResult` as text or JSON.
//!
//! Failed lookups come back as `Err` so that `main` prints them to stderr and
//! exits with status 1.

use super::render::{
    print_messages, render_config, render_daily, render_record, render_word_list,
};
use super::setup::{Cli, Commands, HistoryAction, ListSource, OutputMode, ThemeMode};
use clap::Parser;
use serde::Serialize;
use serde_json::json;
use wordifyapp::api::WordifyApi;
use wordifyapp::commands::{CmdMessage, CmdResult};
use wordifyapp::config::WordifyConfig;
use wordifyapp::daily;
use wordifyapp::error::{Result, WordifyError};
use wordifyapp::init::{initialize, load_config, resolve_paths, WordifyPaths};
use wordifyapp::logging::LoggingConfig;
use wordifyapp::lookup::http::HttpLookup;
use wordifyapp::store::fs_backend::FsBackend;

struct AppContext {
    api: WordifyApi<FsBackend, HttpLookup>,
    output: OutputMode,
}

impl AppContext {
    fn dark(&self) -> bool {
        self.api.dark_mode()
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = resolve_paths(cli.data.clone())?;
    let config = load_config(&paths)?;
    LoggingConfig::new(cli.log_format, config.log_level.clone(), cli.verbose).init();

    if let Some(Commands::Config) = &cli.command {
        return handle_config(&config, &paths, cli.output);
    }

    let context = initialize(paths, config)?;
    let mut ctx = AppContext {
        api: context.api,
        output: cli.output,
    };

    match cli.command {
        None if cli.word.is_empty() => handle_today(&ctx).await,
        None => handle_search(&mut ctx, &cli.word).await,
        Some(Commands::Define { word }) => handle_search(&mut ctx, &word).await,
        Some(Commands::Today) => handle_today(&ctx).await,
        Some(Commands::Favorites) => handle_list(&ctx, ListSource::Favorites),
        Some(Commands::Fav { word }) => handle_toggle_favorite(&mut ctx, &word),
        Some(Commands::History { action }) => match action {
            None => handle_list(&ctx, ListSource::History),
            Some(HistoryAction::Remove { word }) => handle_history_remove(&mut ctx, &word),
            Some(HistoryAction::Clear) => handle_history_clear(&mut ctx),
        },
        Some(Commands::Open { entry, from }) => handle_open(&mut ctx, &entry, from).await,
        Some(Commands::Theme { mode }) => handle_theme(&mut ctx, mode),
        Some(Commands::Config) => Ok(()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a lookup result, or turn its failure into an error.
fn finish_lookup(ctx: &AppContext, mut result: CmdResult) -> Result<()> {
    if let Some(error) = result.lookup_error.take() {
        return Err(error.into());
    }
    match ctx.output {
        OutputMode::Json => print_json(&result),
        OutputMode::Text => {
            if let Some(record) = &result.record {
                print!(
                    "{}",
                    render_record(record, result.is_favorite.unwrap_or(false), ctx.dark())
                );
            }
            Ok(())
        }
    }
}

fn print_result_messages(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    match ctx.output {
        OutputMode::Json => print_json(result),
        OutputMode::Text => {
            print_messages(&result.messages, ctx.dark());
            Ok(())
        }
    }
}

async fn handle_search(ctx: &mut AppContext, words: &[String]) -> Result<()> {
    let result = ctx.api.search(&words.join(" ")).await?;
    finish_lookup(ctx, result)
}

async fn handle_today(ctx: &AppContext) -> Result<()> {
    let record = ctx.api.word_of_the_day(daily::today()).await;
    match (ctx.output, record) {
        (OutputMode::Json, record) => print_json(&json!({ "word_of_the_day": record })),
        (OutputMode::Text, Some(record)) => {
            print!("{}", render_daily(&record, ctx.dark()));
            Ok(())
        }
        (OutputMode::Text, None) => Ok(()),
    }
}

fn handle_list(ctx: &AppContext, source: ListSource) -> Result<()> {
    let result = match source {
        ListSource::Favorites => ctx.api.favorites(),
        ListSource::History => ctx.api.history(),
    };
    match ctx.output {
        OutputMode::Json => print_json(&result),
        OutputMode::Text => {
            print!("{}", render_word_list(&result.words, source, ctx.dark()));
            Ok(())
        }
    }
}

fn handle_toggle_favorite(ctx: &mut AppContext, words: &[String]) -> Result<()> {
    let result = ctx.api.toggle_favorite(&words.join(" "))?;
    print_result_messages(ctx, &result)
}

fn handle_history_remove(ctx: &mut AppContext, words: &[String]) -> Result<()> {
    let result = ctx.api.remove_from_history(&words.join(" "))?;
    print_result_messages(ctx, &result)
}

fn handle_history_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_history()?;
    print_result_messages(ctx, &result)
}

/// A 1-based position in `words`, or the word itself when `entry` is not a number.
fn resolve_entry(words: &[String], entry: &str, source: ListSource) -> Result<String> {
    match entry.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= words.len() => Ok(words[n - 1].clone()),
        Ok(n) => Err(WordifyError::Api(format!(
            "No entry {} in {}",
            n,
            source.view()
        ))),
        Err(_) => Ok(entry.to_string()),
    }
}

async fn handle_open(ctx: &mut AppContext, entry: &str, source: ListSource) -> Result<()> {
    let list = match source {
        ListSource::Favorites => ctx.api.favorites(),
        ListSource::History => ctx.api.history(),
    };
    let word = resolve_entry(&list.words, entry, source)?;

    ctx.api.select_view(source.view());
    let result = ctx.api.open_word(&word).await?;
    finish_lookup(ctx, result)
}

fn describe_theme(dark: bool, explicit: bool) -> String {
    let name = if dark { "dark" } else { "light" };
    if explicit {
        format!("Theme: {}", name)
    } else {
        format!("Theme: {} (system default)", name)
    }
}

fn handle_theme(ctx: &mut AppContext, mode: Option<ThemeMode>) -> Result<()> {
    let mut result = match mode {
        None => CmdResult {
            dark_mode: Some(ctx.api.dark_mode()),
            ..Default::default()
        },
        Some(ThemeMode::Dark) => ctx.api.set_dark_mode(true)?,
        Some(ThemeMode::Light) => ctx.api.set_dark_mode(false)?,
        Some(ThemeMode::Toggle) => ctx.api.toggle_theme()?,
    };
    let theme = ctx.api.theme();
    result.add_message(CmdMessage::info(describe_theme(
        theme.is_dark(),
        theme.is_explicit(),
    )));
    print_result_messages(ctx, &result)
}

fn handle_config(config: &WordifyConfig, paths: &WordifyPaths, output: OutputMode) -> Result<()> {
    match output {
        OutputMode::Json => print_json(&json!({
            "config": config,
            "data_dir": paths.data,
            "config_dir": paths.config,
        })),
        OutputMode::Text => {
            // No store is opened for `config`, so the palette is not known here.
            print!("{}", render_config(config, paths, false));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn resolve_entry_by_position() {
        let list = words(&["serene", "eloquent"]);
        assert_eq!(
            resolve_entry(&list, "2", ListSource::History).unwrap(),
            "eloquent"
        );
        assert_eq!(
            resolve_entry(&list, " 1 ", ListSource::History).unwrap(),
            "serene"
        );
    }

    #[test]
    fn resolve_entry_out_of_range() {
        let list = words(&["serene"]);
        let err = resolve_entry(&list, "3", ListSource::Favorites).unwrap_err();
        assert_eq!(err.to_string(), "No entry 3 in favorites");
        assert!(resolve_entry(&list, "0", ListSource::Favorites).is_err());
    }

    #[test]
    fn resolve_entry_by_word() {
        assert_eq!(
            resolve_entry(&[], "luminous", ListSource::History).unwrap(),
            "luminous"
        );
    }

    #[test]
    fn describe_theme_marks_system_default() {
        assert_eq!(describe_theme(true, true), "Theme: dark");
        assert_eq!(describe_theme(false, false), "Theme: light (system default)");
    }
}
