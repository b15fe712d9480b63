use super::backend::StorageBackend;
use crate::error::{Result, WordifyError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since wordify is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value without counting it as a write, e.g. to simulate
    /// state left behind by a previous session.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `set`/`remove` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(WordifyError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.values.borrow_mut().remove(key);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_missing_key() {
        let backend = MemBackend::new();
        assert_eq!(backend.get("nope").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips_and_counts_writes() {
        let backend = MemBackend::new();
        backend.set("k", "[\"a\"]").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("[\"a\"]"));
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn seeded_values_are_not_counted_as_writes() {
        let backend = MemBackend::new().with_value("k", "true");
        assert_eq!(backend.raw("k").as_deref(), Some("true"));
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn simulated_write_error_leaves_value_untouched() {
        let backend = MemBackend::new().with_value("k", "old");
        backend.set_simulate_write_error(true);
        assert!(backend.set("k", "new").is_err());
        assert!(backend.remove("k").is_err());
        assert_eq!(backend.raw("k").as_deref(), Some("old"));
        assert_eq!(backend.write_count(), 0);
    }
}
