//! # Preferences Store
//!
//! A small persistent key/value store for integer counters such as the best
//! survival score. Values live in memory and are written to a flat JSON object
//! on [`Preferences::flush`].

use crate::MatchSoundsResult;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent key to integer store.
///
/// Missing keys are never an error: lookups fall back to a default value.
///
/// # Examples
///
/// ```
/// use match_sounds::Preferences;
///
/// let mut prefs = Preferences::in_memory();
/// assert_eq!(prefs.get_integer("roundsPlayed"), 0);
///
/// prefs.put_integer("roundsPlayed", 10);
/// assert_eq!(prefs.get_integer_or("roundsPlayed", 5), 10);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(flatten)]
    values: BTreeMap<String, i32>,
    #[serde(skip)]
    path: Option<PathBuf>,
    #[serde(skip)]
    dirty: bool,
}

impl Preferences {
    /// Creates an empty store that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the store backed by `path`.
    ///
    /// A missing file yields an empty store; a malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> MatchSoundsResult<Self> {
        let path = path.as_ref().to_path_buf();

        let mut prefs = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let prefs: Preferences = serde_json::from_str(&contents)?;
            info!(
                "Loaded {} preference(s) from {}",
                prefs.values.len(),
                path.display()
            );
            prefs
        } else {
            info!("No preferences at {}, starting fresh", path.display());
            Preferences::default()
        };

        prefs.path = Some(path);
        Ok(prefs)
    }

    /// Returns the value stored under `key`, or 0.
    pub fn get_integer(&self, key: &str) -> i32 {
        self.get_integer_or(key, 0)
    }

    /// Returns the value stored under `key`, or `default`.
    pub fn get_integer_or(&self, key: &str, default: i32) -> i32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    /// Stores `value` under `key`. Not persisted until [`flush`](Self::flush).
    pub fn put_integer(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), value);
        self.dirty = true;
    }

    /// Whether a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes pending changes to the backing file.
    ///
    /// In-memory stores and stores without changes are left untouched.
    pub fn flush(&mut self) -> MatchSoundsResult<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!("Flushed preferences to {}", path.display());

        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_keys_default() {
        let prefs = Preferences::in_memory();
        assert_eq!(prefs.get_integer("survivalBest"), 0);
        assert_eq!(prefs.get_integer_or("roundsPlayed", 7), 7);
        assert!(!prefs.contains("survivalBest"));
    }

    #[test]
    fn test_put_overwrites() {
        let mut prefs = Preferences::in_memory();
        prefs.put_integer("roundsPlayed", 9);
        prefs.put_integer("roundsPlayed", 10);
        assert!(prefs.contains("roundsPlayed"));
        assert_eq!(prefs.get_integer_or("roundsPlayed", 0), 10);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let prefs = Preferences::load(dir.path().join("prefs.json")).unwrap();
        assert!(!prefs.contains("survivalBest"));
        assert_eq!(prefs.path(), Some(dir.path().join("prefs.json").as_path()));
    }

    #[test]
    fn test_flush_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = Preferences::load(&path).unwrap();
        prefs.put_integer("survivalBest", 42);
        prefs.put_integer("roundsPlayed", 10);
        prefs.flush().unwrap();

        let reloaded = Preferences::load(&path).unwrap();
        assert_eq!(reloaded.get_integer("survivalBest"), 42);
        assert_eq!(reloaded.get_integer("roundsPlayed"), 10);
    }

    #[test]
    fn test_file_is_flat_json_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = Preferences::load(&path).unwrap();
        prefs.put_integer("survivalBest", 3);
        prefs.flush().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "survivalBest": 3 }));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Preferences::load(&path).is_err());
    }

    #[test]
    fn test_in_memory_flush_is_noop() {
        let mut prefs = Preferences::in_memory();
        prefs.put_integer("survivalBest", 1);
        assert!(prefs.flush().is_ok());
    }
}
