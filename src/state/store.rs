use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Result;

/// A small key-value store holding floating-point values.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if it was never written.
    fn get_f64(&self, key: &str) -> Result<Option<f64>>;

    /// Write `value` under `key`. Returns once the value is durable.
    fn put_f64(&mut self, key: &str, value: f64) -> Result<()>;
}

/// Store backed by a single JSON object on disk.
///
/// A missing file reads as an empty store. Writes rewrite the whole file and
/// keep any other keys already in it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, f64>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_f64(&self, key: &str) -> Result<Option<f64>> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn put_f64(&mut self, key: &str, value: f64) -> Result<()> {
        // Unreadable contents are replaced rather than blocking the write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value);

        write_atomic(&self.path, |file| {
            serde_json::to_writer_pretty(&mut *file, &entries)?;
            file.flush()?;
            Ok(())
        })?;
        debug!(path = %self.path.display(), key, value, "store written");
        Ok(())
    }
}

/// Replace `path` with whatever `write` produces.
///
/// The contents go to a temp file in the same directory, are synced, then
/// renamed over `path`. On any failure `path` keeps its previous contents.
fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    write(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// In-memory store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_f64(&self, key: &str) -> Result<Option<f64>> {
        Ok(self.entries.get(key).copied())
    }

    fn put_f64(&mut self, key: &str, value: f64) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get_f64("CAL_KEY").unwrap(), None);
    }

    #[test]
    fn test_put_then_get() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("prefs.json"));
        store.put_f64("CAL_KEY", 150.0).unwrap();

        let reopened = JsonFileStore::new(store.path());
        assert_eq!(reopened.get_f64("CAL_KEY").unwrap(), Some(150.0));
    }

    #[test]
    fn test_put_preserves_other_keys() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"theme": 2.0}"#).unwrap();

        let mut store = JsonFileStore::new(file.path());
        store.put_f64("CAL_KEY", 50.0).unwrap();

        assert_eq!(store.get_f64("theme").unwrap(), Some(2.0));
        assert_eq!(store.get_f64("CAL_KEY").unwrap(), Some(50.0));
    }

    #[test]
    fn test_corrupt_file_is_an_error_until_rewritten() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let mut store = JsonFileStore::new(file.path());
        assert!(store.get_f64("CAL_KEY").is_err());

        store.put_f64("CAL_KEY", 100.0).unwrap();
        assert_eq!(store.get_f64("CAL_KEY").unwrap(), Some(100.0));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested/dir/prefs.json"));
        store.put_f64("CAL_KEY", 25.0).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = JsonFileStore::new(&path);
        store.put_f64("CAL_KEY", 300.0).unwrap();

        let result = write_atomic(&path, |file| {
            file.write_all(br#"{"CAL_"#)?;
            Err(std::io::Error::other("interrupted").into())
        });
        assert!(result.is_err());

        assert_eq!(store.get_f64("CAL_KEY").unwrap(), Some(300.0));
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("prefs.json"));
        for i in 1..=5 {
            store.put_f64("CAL_KEY", i as f64 * 50.0).unwrap();
        }

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("prefs.json")]);
        assert_eq!(store.get_f64("CAL_KEY").unwrap(), Some(250.0));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get_f64("CAL_KEY").unwrap(), None);

        store.put_f64("CAL_KEY", 75.0).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_f64("CAL_KEY").unwrap(), Some(75.0));
    }
}
