//! Initialize store use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStore};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Initialize a new rota store at the specified path.
pub fn init(path: &Path, now: DateTime<Utc>) -> Result<FileSystemStore> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemStore::new(path.to_path_buf());
    store.initialize()?;
    store.save_config(&Config::new(now))?;

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FutureAnchorPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_structure_and_config() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("team");

        let store = init(&target, Utc::now()).unwrap();

        assert!(target.join(".rota/lists").is_dir());
        assert!(target.join(".rota/config.toml").is_file());
        assert_eq!(
            store.load_config().unwrap().future_anchor,
            FutureAnchorPolicy::Clamp
        );
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Utc::now()).unwrap();
        assert!(init(temp.path(), Utc::now()).is_err());
    }
}
