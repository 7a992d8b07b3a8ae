use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::StorageError;

/// String key-value storage with local-storage semantics.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write a value, replacing any previous one.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove a value. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// In-process store that lives only for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with the given entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Status describing how a file store was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Store persisted as a flat JSON object of string values.
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename, so readers never see a half-written file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    status: StoreLoadStatus,
}

impl JsonFileStore {
    /// Open the store at the default per-user location.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(default_store_path())
    }

    /// Open the store at `path`.
    ///
    /// A missing file opens an empty store. A file that is not a JSON object
    /// also opens empty and reports [`StoreLoadStatus::Invalid`]; it is
    /// replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self {
                    path,
                    entries: BTreeMap::new(),
                    status: StoreLoadStatus::Missing,
                });
            },
            Err(err) => return Err(err.into()),
        };

        let (entries, status) = match parse_entries(&data) {
            Ok(entries) => (entries, StoreLoadStatus::Loaded),
            Err(message) => (BTreeMap::new(), StoreLoadStatus::Invalid(message)),
        };

        Ok(Self {
            path,
            entries,
            status,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_status(&self) -> &StoreLoadStatus {
        &self.status
    }

    fn save(&self) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, payload.as_bytes())?;

        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

/// Per-user directory holding the client's local files.
///
/// `$HOME/.config/market`, or a `market` directory under the temp dir when
/// `HOME` is unset.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("market");
    }

    std::env::temp_dir().join("market")
}

/// Default location of the persisted store.
pub fn default_store_path() -> PathBuf {
    config_dir().join("local_storage.json")
}

fn parse_entries(data: &str) -> Result<BTreeMap<String, String>, String> {
    let value = serde_json::from_str::<serde_json::Value>(data)
        .map_err(|err| format!("{err}"))?;
    let object = value
        .as_object()
        .ok_or_else(|| String::from("expected a JSON object"))?;

    Ok(object
        .iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect())
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
