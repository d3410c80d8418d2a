//! File system record store

use crate::domain::RotationRecord;
use crate::error::{Result, RotaError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Identifier and display name of a stored list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub id: String,
    pub name: String,
}

/// Keyed storage of rotation records
pub trait RecordStore {
    /// Load the record stored under `id`
    fn load(&self, id: &str) -> Result<RotationRecord>;

    /// Store `record` under its id, replacing whatever was there
    fn save(&self, record: &RotationRecord) -> Result<()>;

    /// Remove the record stored under `id`; missing records are not an error
    fn delete(&self, id: &str) -> Result<()>;

    /// Summaries of every readable record, sorted by name
    fn list(&self) -> Result<Vec<ListSummary>>;
}

/// Stores each record as `.rota/lists/<id>.json` below a root directory
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Discover the store root.
    /// First checks ROTA_ROOT environment variable, then walks up from the
    /// current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("ROTA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_rota_dir(&path) {
                return Ok(FileSystemStore::new(path));
            } else {
                return Err(RotaError::Config(format!(
                    "ROTA_ROOT is set to '{}' but no .rota directory found. \
                    Run 'rota init' in that directory or unset ROTA_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_rota_dir(&current) {
                return Ok(FileSystemStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(RotaError::NotRotaDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_rota_dir(path: &Path) -> bool {
        path.join(".rota").is_dir()
    }

    /// Check if .rota directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_rota_dir(&self.root)
    }

    /// Create the .rota directory structure
    pub fn initialize(&self) -> Result<()> {
        let rota_dir = self.root.join(".rota");

        if rota_dir.exists() {
            return Err(RotaError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(rota_dir.join("lists"))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn lists_dir(&self) -> PathBuf {
        self.root.join(".rota").join("lists")
    }

    /// Path of the record file for `id`, or `None` if `id` cannot name a file
    fn record_path(&self, id: &str) -> Option<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| self.lists_dir().join(format!("{}.json", id)))
    }

    /// Write using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.rota-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("list.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl RecordStore for FileSystemStore {
    fn load(&self, id: &str) -> Result<RotationRecord> {
        let path = self
            .record_path(id)
            .ok_or_else(|| RotaError::ListNotFound(id.to_string()))?;

        let text = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RotaError::ListNotFound(id.to_string())
            } else {
                RotaError::Io(e)
            }
        })?;

        debug!(id, path = %path.display(), "loaded list");
        RotationRecord::decode(&text)
    }

    fn save(&self, record: &RotationRecord) -> Result<()> {
        let path = self
            .record_path(&record.id)
            .ok_or_else(|| RotaError::Config(format!("Invalid list id: '{}'", record.id)))?;

        let mut json = serde_json::to_string_pretty(record)?;
        json.push('\n');
        Self::write_atomic(&path, &json)?;

        debug!(id = %record.id, path = %path.display(), "saved list");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let Some(path) = self.record_path(id) else {
            return Ok(());
        };

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RotaError::Io(e)),
        }
    }

    fn list(&self) -> Result<Vec<ListSummary>> {
        let dir = self.lists_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut lists = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match self.load(id) {
                Ok(record) if record.id != id => warn!(
                    path = %path.display(),
                    stored_id = %record.id,
                    "skipping list whose id does not match its file name"
                ),
                Ok(record) => lists.push(ListSummary {
                    id: record.id,
                    name: record.name,
                }),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable list"),
            }
        }

        lists.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn initialized_store() -> (TempDir, FileSystemStore) {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        (temp, store)
    }

    fn record(id: &str, name: &str) -> RotationRecord {
        RotationRecord::new(
            id.to_string(),
            name.to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_initialize_creates_lists_dir() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        assert!(!store.is_initialized());
        store.initialize().unwrap();

        assert!(store.is_initialized());
        assert!(temp.path().join(".rota/lists").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, store) = initialized_store();
        assert!(store.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _store) = initialized_store();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let store = FileSystemStore::discover_from(&subdir).unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_rota() {
        let temp = TempDir::new().unwrap();

        match FileSystemStore::discover_from(temp.path()).unwrap_err() {
            RotaError::NotRotaDirectory(_) => {}
            other => panic!("Expected NotRotaDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load() {
        let (temp, store) = initialized_store();
        let mut rec = record("abc-123", "Cleaners");
        rec.people = vec!["Alice".to_string(), "Bob".to_string()];

        store.save(&rec).unwrap();
        assert!(temp.path().join(".rota/lists/abc-123.json").exists());

        let loaded = store.load("abc-123").unwrap();
        assert_eq!(loaded, rec);
    }

    #[test]
    fn test_saved_file_format() {
        let (temp, store) = initialized_store();
        store.save(&record("abc", "Cleaners")).unwrap();

        let text = fs::read_to_string(temp.path().join(".rota/lists/abc.json")).unwrap();
        assert!(text.contains("\"lastRotation\": \"2025-01-13\""));
        assert!(text.contains("\"people\": []"));
    }

    #[test]
    fn test_save_overwrites() {
        let (_temp, store) = initialized_store();
        let mut rec = record("abc", "Cleaners");
        store.save(&rec).unwrap();

        rec.name = "Dishes".to_string();
        store.save(&rec).unwrap();

        assert_eq!(store.load("abc").unwrap().name, "Dishes");
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let (_temp, store) = initialized_store();

        match store.load("missing").unwrap_err() {
            RotaError::ListNotFound(id) => assert_eq!(id, "missing"),
            other => panic!("Expected ListNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_path_like_ids() {
        let (_temp, store) = initialized_store();
        assert!(matches!(
            store.load("../config"),
            Err(RotaError::ListNotFound(_))
        ));
        assert!(matches!(store.load(""), Err(RotaError::ListNotFound(_))));
    }

    #[test]
    fn test_load_legacy_record_does_not_rewrite() {
        let (temp, store) = initialized_store();
        let path = temp.path().join(".rota/lists/old.json");
        let legacy = r#"{"id":"old","name":"Old","lastRotation":1736726400000,"people":["A"]}"#;
        fs::write(&path, legacy).unwrap();

        let loaded = store.load("old").unwrap();
        assert_eq!(
            loaded.last_rotation,
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), legacy);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (temp, store) = initialized_store();
        store.save(&record("abc", "Cleaners")).unwrap();

        store.delete("abc").unwrap();
        assert!(!temp.path().join(".rota/lists/abc.json").exists());

        store.delete("abc").unwrap();
    }

    #[test]
    fn test_list_sorted_by_name() {
        let (_temp, store) = initialized_store();
        store.save(&record("id-b", "B List")).unwrap();
        store.save(&record("id-a", "A List")).unwrap();
        store.save(&record("id-c", "C List")).unwrap();

        let names: Vec<String> = store.list().unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["A List", "B List", "C List"]);
    }

    #[test]
    fn test_list_skips_unreadable_files() {
        let (temp, store) = initialized_store();
        store.save(&record("good", "Good")).unwrap();
        fs::write(temp.path().join(".rota/lists/bad.json"), "{ nope").unwrap();
        fs::write(temp.path().join(".rota/lists/notes.txt"), "ignore me").unwrap();

        let lists = store.list().unwrap();
        assert_eq!(
            lists,
            vec![ListSummary {
                id: "good".to_string(),
                name: "Good".to_string()
            }]
        );
    }

    #[test]
    fn test_list_skips_id_mismatch() {
        let (temp, store) = initialized_store();
        store.save(&record("original", "Original")).unwrap();
        fs::copy(
            temp.path().join(".rota/lists/original.json"),
            temp.path().join(".rota/lists/copy.json"),
        )
        .unwrap();

        let ids: Vec<String> = store.list().unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["original"]);
    }

    #[test]
    fn test_list_empty_store() {
        let (_temp, store) = initialized_store();
        assert!(store.list().unwrap().is_empty());
    }
}
