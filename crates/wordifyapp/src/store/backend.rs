use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of persistence (filesystem vs memory), while
/// [`ListManager`](crate::manager::ListManager) and
/// [`ThemePreference`](crate::theme::ThemePreference) handle the "what".
///
/// All operations are synchronous and atomic per key: a reader never observes a
/// partially written value, and the last write wins. There are no cross-key
/// transactions.
pub trait StorageBackend {
    /// Read the raw string stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename).
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
