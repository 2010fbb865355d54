//! Persisted visitor preferences (theme and locale).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key for the theme flag.
pub const THEME_KEY: &str = "theme";
/// Storage key for the locale flag.
pub const LANG_KEY: &str = "lang";

/// Errors from preference storage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// I/O error on the backing file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Backing file could not be encoded.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The backing store refused the operation (e.g. storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Supported content locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English.
    En,
    /// Indonesian (default).
    #[default]
    Id,
}

impl Locale {
    /// Both locales, in selector order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Id];

    /// Two-letter code used in storage and in the content dictionary.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "id" => Ok(Locale::Id),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// Key-value store for the two preference flags.
///
/// Reads are infallible (absence and failure both mean "use the default");
/// writes report failure so callers can log it.
pub trait PreferenceStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value (last write wins).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store (no persistence). Counts writes for inspection.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryPreferenceStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `pairs`.
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            writes: 0,
        }
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Persisted preferences schema.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PersistedPreferences {
    /// Schema version for migration.
    pub version: u32,
    /// Stored flags.
    pub values: BTreeMap<String, String>,
}

impl PersistedPreferences {
    /// Current schema version.
    pub const VERSION: u32 = 1;
}

/// Preference store backed by a JSON file.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`, loading existing values if the file exists.
    /// An unreadable or corrupt file starts empty.
    #[must_use = "this returns a Result that should be checked"]
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str::<PersistedPreferences>(&content)
                .map(|p| p.values)
                .unwrap_or_default()
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        let state = PersistedPreferences {
            version: PersistedPreferences::VERSION,
            values: self.values.clone(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Atomic write: temp file + rename
        let temp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(&state)?;
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}
