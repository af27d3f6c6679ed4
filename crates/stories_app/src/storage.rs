use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use app_logging::app_warn;
use serde::{Deserialize, Serialize};
use stories_core::{StorageError, StoragePort};
use stories_engine::write_atomically;

const STORE_FILENAME: &str = ".stories_store.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedEntries {
    entries: BTreeMap<String, String>,
}

/// Durable key-value store backed by one RON file per directory.
///
/// Entries are loaded once at open and kept in memory; each committed `set`
/// rewrites the whole file atomically. Missing or corrupt files degrade to
/// an empty store with a logged warning.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let path = dir.into().join(STORE_FILENAME);
        let entries = load_entries(&path);
        Self { path, entries }
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeMap::new();
        }
        Err(err) => {
            app_warn!("Failed to read key-value store from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };

    match ron::from_str::<PersistedEntries>(&content) {
        Ok(state) => state.entries,
        Err(err) => {
            app_warn!("Failed to parse key-value store from {:?}: {}", path, err);
            BTreeMap::new()
        }
    }
}

impl StoragePort for FileKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());

        let state = PersistedEntries {
            entries: self.entries.clone(),
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&state, pretty)
            .map_err(|err| StorageError::new(err.to_string()))?;
        write_atomically(&self.path, &content).map_err(|err| StorageError::new(err.to_string()))
    }
}
