//! Durable theme preference.
//!
//! The preference is a single token under [`THEME_STORAGE_KEY`]. Reads never
//! fail: an empty, unreadable, or unrecognized slot means [`ThemePreference::Device`].
//! Writes are best-effort.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use dioxus_logger::tracing::warn;

use crate::error::StorageError;

pub const THEME_STORAGE_KEY: &str = "theme";

/// The user's display-mode choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    /// Mirror the operating system's color scheme.
    #[default]
    Device,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::Device];

    /// Parse a stored token. Matching is exact; anything else is unrecognized.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "device" => Some(Self::Device),
            _ => None,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Device => "device",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Device => "Device",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
            Self::Device => "📱",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// String key-value storage the preference is persisted in.
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Session-only storage, used when `localStorage` is missing.
///
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct ThemePreferenceStore {
    storage: Box<dyn PreferenceStorage>,
}

impl fmt::Debug for ThemePreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreferenceStore").finish_non_exhaustive()
    }
}

impl ThemePreferenceStore {
    pub fn new(storage: impl PreferenceStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    pub fn read(&self) -> ThemePreference {
        match self.storage.get_item(THEME_STORAGE_KEY) {
            Ok(Some(token)) => ThemePreference::from_token(&token).unwrap_or_else(|| {
                warn!(token = %token, "Unrecognized theme preference, using device");
                ThemePreference::Device
            }),
            Ok(None) => ThemePreference::Device,
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference, using device");
                ThemePreference::Device
            }
        }
    }

    pub fn write(&self, preference: ThemePreference) {
        if let Err(e) = self
            .storage
            .set_item(THEME_STORAGE_KEY, preference.as_token())
        {
            warn!(
                preference = %preference,
                error = %e,
                "Failed to persist theme preference"
            );
        }
    }
}
