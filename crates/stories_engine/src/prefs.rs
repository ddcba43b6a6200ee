use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stories_logging::{stories_error, stories_warn};
use tempfile::NamedTempFile;

/// Preference key for the last submitted search term.
pub const SEARCH_TERM_KEY: &str = "search";

/// Injected storage capability for string preferences.
pub trait PreferenceStore {
    /// Stored value for `key`, or `default` when nothing is stored.
    /// Reading never writes anything back.
    fn get(&self, key: &str, default: &str) -> String;

    /// Best-effort durable write. When storage is unavailable the write is
    /// logged and dropped; in-memory operation continues unaffected.
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPrefs {
    entries: BTreeMap<String, String>,
}

/// Preference file in RON format, replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> PersistedPrefs {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return PersistedPrefs::default();
            }
            Err(err) => {
                stories_warn!("Failed to read preferences from {:?}: {}", self.path, err);
                return PersistedPrefs::default();
            }
        };

        match ron::from_str(&content) {
            Ok(prefs) => prefs,
            Err(err) => {
                stories_warn!("Failed to parse preferences from {:?}: {}", self.path, err);
                PersistedPrefs::default()
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str, default: &str) -> String {
        self.load()
            .entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn set(&self, key: &str, value: &str) {
        let mut prefs = self.load();
        if prefs.entries.get(key).map(String::as_str) == Some(value) {
            return;
        }
        prefs.entries.insert(key.to_string(), value.to_string());

        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&prefs, pretty) {
            Ok(text) => text,
            Err(err) => {
                stories_error!("Failed to serialize preferences: {}", err);
                return;
            }
        };

        if let Err(err) = write_atomic(&self.path, &content) {
            stories_error!("Failed to write preferences to {:?}: {}", self.path, err);
        }
    }
}

/// Write `content` to `path` via a temp file in the same directory plus rename.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// The last submitted search term, backed by an injected [`PreferenceStore`].
///
/// Loading reads without writing, so a bootstrap default never clobbers a
/// pre-existing stored term. A write happens only when a committed term
/// differs from what was loaded or last committed.
pub struct PersistedTerm<S: PreferenceStore> {
    store: S,
    key: String,
    current: String,
}

impl<S: PreferenceStore> PersistedTerm<S> {
    pub fn load(store: S, key: impl Into<String>, default: &str) -> Self {
        let key = key.into();
        let current = store.get(&key, default);
        Self {
            store,
            key,
            current,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn commit(&mut self, term: &str) {
        if self.current == term {
            return;
        }
        self.current = term.to_string();
        self.store.set(&self.key, term);
    }
}
