//! Persisted dark/light preference.
//!
//! When the user has never chosen, the environment's color-scheme hint decides.
//! Every change is written immediately.

use crate::error::Result;
use crate::store::{load_json, save_json, StorageBackend, Stored, DARK_MODE_KEY};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    dark: bool,
    explicit: bool,
}

impl ThemePreference {
    /// Load the stored preference, falling back to `hint` when none is stored
    /// (or the stored value is unreadable).
    pub fn load<S, F>(store: &S, hint: F) -> Result<Self>
    where
        S: StorageBackend + ?Sized,
        F: FnOnce() -> bool,
    {
        match load_json::<S, bool>(store, DARK_MODE_KEY)? {
            Stored::Value(dark) => Ok(Self {
                dark,
                explicit: true,
            }),
            Stored::Missing => Ok(Self {
                dark: hint(),
                explicit: false,
            }),
            Stored::Corrupt(reason) => {
                warn!(%reason, "ignoring unreadable theme preference");
                Ok(Self {
                    dark: hint(),
                    explicit: false,
                })
            }
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Whether the value came from the store rather than the environment hint.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    pub fn set<S: StorageBackend + ?Sized>(&mut self, store: &S, dark: bool) -> Result<()> {
        save_json(store, DARK_MODE_KEY, &dark)?;
        self.dark = dark;
        self.explicit = true;
        Ok(())
    }

    /// Returns the new value.
    pub fn toggle<S: StorageBackend + ?Sized>(&mut self, store: &S) -> Result<bool> {
        self.set(store, !self.dark)?;
        Ok(self.dark)
    }
}

/// The operating environment's color-scheme hint.
pub fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), dark_light::Mode::Dark)
}
