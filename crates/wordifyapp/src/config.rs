//! # Configuration
//!
//! Wordify configuration is a [`confique`] struct loaded in layers.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `WORDIFY_API_BASE_URL`, `WORDIFY_REQUEST_TIMEOUT_SECS`,
//!    `WORDIFY_LOG_LEVEL`.
//! 2. **Config files**: `wordify.toml` in the config directory, then in the data
//!    directory (see [`crate::init`]).
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api_base_url` | public dictionary service | Entries endpoint, the word is appended |
//! | `request_timeout_secs` | unset | Per-request timeout; unset means none |
//! | `log_level` | `warn` | Default log filter when `RUST_LOG` is not set |

use crate::error::{Result, WordifyError};
use crate::lookup::DEFAULT_BASE_URL;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "wordify.toml";

/// Configuration for wordify, stored in `wordify.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordifyConfig {
    /// Dictionary entries endpoint.
    #[config(
        env = "WORDIFY_API_BASE_URL",
        default = "https://api.dictionaryapi.dev/api/v2/entries/en"
    )]
    pub api_base_url: String,

    /// Request timeout in seconds. Lookups wait indefinitely when absent.
    #[config(env = "WORDIFY_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[config(env = "WORDIFY_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for WordifyConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            log_level: "warn".to_string(),
        }
    }
}

impl WordifyConfig {
    /// Load from the environment, then `wordify.toml` in each of `dirs` that has
    /// one. Earlier directories win.
    pub fn load<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for dir in dirs {
            builder = builder.file(dir.as_ref().join(CONFIG_FILE_NAME));
        }
        builder
            .load()
            .map_err(|e| WordifyError::Config(e.to_string()))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            Some(0) | None => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        }
    }
}
