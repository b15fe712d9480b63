//! # Initialization
//!
//! Wires the production stack: a [`FsBackend`] under the data directory, an
//! [`HttpLookup`] configured from [`WordifyConfig`], and the environment's
//! color-scheme hint for the theme default.
//!
//! ## Directories
//!
//! The data directory is resolved in order:
//! 1. An explicit override (the CLI's `--data` flag).
//! 2. The `WORDIFY_DATA` environment variable (primarily for testing).
//! 3. The OS data directory via [`directories::ProjectDirs`].
//!
//! `wordify.toml` is read from the config directory and then the data directory.
//! When the data directory is overridden, both are that directory.

use crate::api::WordifyApi;
use crate::config::WordifyConfig;
use crate::error::{Result, WordifyError};
use crate::lookup::http::HttpLookup;
use crate::store::fs_backend::FsBackend;
use crate::theme::system_prefers_dark;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_ENV: &str = "WORDIFY_DATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordifyPaths {
    pub data: PathBuf,
    pub config: PathBuf,
}

pub struct WordifyContext {
    pub api: WordifyApi<FsBackend, HttpLookup>,
    pub config: WordifyConfig,
    pub paths: WordifyPaths,
}

pub fn resolve_paths(data_override: Option<PathBuf>) -> Result<WordifyPaths> {
    let explicit = data_override.or_else(|| std::env::var_os(DATA_ENV).map(PathBuf::from));
    if let Some(data) = explicit {
        return Ok(WordifyPaths {
            config: data.clone(),
            data,
        });
    }

    let dirs = ProjectDirs::from("com", "wordify", "wordify").ok_or_else(|| {
        WordifyError::Config("could not determine a home directory".to_string())
    })?;
    Ok(WordifyPaths {
        data: dirs.data_dir().to_path_buf(),
        config: dirs.config_dir().to_path_buf(),
    })
}

pub fn load_config(paths: &WordifyPaths) -> Result<WordifyConfig> {
    WordifyConfig::load(&[&paths.config, &paths.data])
}

pub fn build_lookup(config: &WordifyConfig) -> HttpLookup {
    HttpLookup::new(config.api_base_url.clone()).with_timeout(config.request_timeout())
}

pub fn initialize(paths: WordifyPaths, config: WordifyConfig) -> Result<WordifyContext> {
    debug!(data = %paths.data.display(), config = %paths.config.display(), "initializing");
    let store = FsBackend::new(paths.data.clone());
    let api = WordifyApi::new(store, build_lookup(&config), system_prefers_dark)?;
    Ok(WordifyContext { api, config, paths })
}
