//! # Storage Layer
//!
//! Wordify persists three small values between sessions: the theme preference,
//! the favorites list and the search history. They live in a plain key-value
//! store behind the [`StorageBackend`] trait, so the application can run against
//! the filesystem in production and against memory in tests.
//!
//! ## Keys
//!
//! | Key | JSON shape | Meaning |
//! |-----|-----------|---------|
//! | `wordify-dark-mode` | `true` / `false` | Theme preference |
//! | `wordify-favorites` | `["word", ...]` | Favorites, insertion order |
//! | `wordify-history` | `["word", ...]` | History, newest first |
//!
//! ## Write Discipline
//!
//! Every mutation writes the **full** serialized value immediately. There is no
//! batching and no write-behind, so the in-memory copy and the stored copy never
//! diverge once a mutation returns.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key, atomic tmp+rename writes.
//! - [`mem_backend::MemBackend`]: in-memory, counts writes and can simulate failures.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── wordify-dark-mode.json
//! ├── wordify-favorites.json
//! └── wordify-history.json
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

pub const DARK_MODE_KEY: &str = "wordify-dark-mode";
pub const FAVORITES_KEY: &str = "wordify-favorites";
pub const HISTORY_KEY: &str = "wordify-history";

/// Outcome of reading a JSON value from the store.
#[derive(Debug, PartialEq)]
pub enum Stored<T> {
    Missing,
    Value(T),
    /// Present, but not the expected shape. Carries the parse error text.
    Corrupt(String),
}

/// Read `key` and decode it as JSON. Backend I/O errors propagate; shape
/// mismatches are reported as [`Stored::Corrupt`] so callers can fail soft.
pub fn load_json<S, T>(store: &S, key: &str) -> Result<Stored<T>>
where
    S: StorageBackend + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Stored::Missing);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Stored::Value(value)),
        Err(e) => Ok(Stored::Corrupt(e.to_string())),
    }
}

/// Encode `value` as JSON and write it under `key`.
pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<()>
where
    S: StorageBackend + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
