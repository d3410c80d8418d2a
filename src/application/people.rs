//! Edit the people in a list

use crate::domain::MoveDirection;
use crate::error::{Result, RotaError};
use crate::infrastructure::RecordStore;
use tracing::debug;

/// Outcome of adding a person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Service for add/remove/reorder operations on a list's queue
pub struct PeopleService<S> {
    store: S,
}

impl<S: RecordStore> PeopleService<S> {
    pub fn new(store: S) -> Self {
        PeopleService { store }
    }

    /// Append a person to the end of the queue.
    ///
    /// An exact duplicate is left out and nothing is written.
    pub fn add(&self, id: &str, person: &str) -> Result<AddOutcome> {
        let person = person.trim();
        if person.is_empty() {
            return Err(RotaError::InvalidName(
                "person name cannot be empty".to_string(),
            ));
        }

        let mut record = self.store.load(id)?;
        match record.add_person(person) {
            Ok(()) => {}
            Err(RotaError::DuplicatePerson(_)) => return Ok(AddOutcome::AlreadyPresent),
            Err(e) => return Err(e),
        }
        self.store.save(&record)?;

        debug!(id, person, "added person");
        Ok(AddOutcome::Added)
    }

    /// Remove the person at zero-based `index`, returning their name
    pub fn remove(&self, id: &str, index: usize) -> Result<String> {
        let mut record = self.store.load(id)?;
        let removed = record.remove_person(index)?;
        self.store.save(&record)?;

        debug!(id, index, person = %removed, "removed person");
        Ok(removed)
    }

    /// Swap the person at `index` with its neighbour.
    ///
    /// Returns `false` (and writes nothing) when already at that end.
    pub fn move_person(&self, id: &str, index: usize, direction: MoveDirection) -> Result<bool> {
        let mut record = self.store.load(id)?;
        if !record.move_person(index, direction)? {
            return Ok(false);
        }
        self.store.save(&record)?;

        debug!(id, index, ?direction, "moved person");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RotationRecord;
    use crate::infrastructure::FileSystemStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn service() -> (TempDir, FileSystemStore, PeopleService<FileSystemStore>) {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        let record = RotationRecord::new(
            "list".to_string(),
            "People Test".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
        );
        store.save(&record).unwrap();
        let svc = PeopleService::new(store.clone());
        (temp, store, svc)
    }

    fn people(store: &FileSystemStore) -> Vec<String> {
        store.load("list").unwrap().people
    }

    #[test]
    fn test_add_move_remove() {
        let (_temp, store, svc) = service();

        svc.add("list", "Alice").unwrap();
        svc.add("list", "Bob").unwrap();
        svc.add("list", "Charlie").unwrap();
        assert_eq!(people(&store), vec!["Alice", "Bob", "Charlie"]);

        assert!(svc.move_person("list", 1, MoveDirection::Up).unwrap());
        assert_eq!(people(&store), vec!["Bob", "Alice", "Charlie"]);

        assert!(svc.move_person("list", 0, MoveDirection::Down).unwrap());
        assert_eq!(people(&store), vec!["Alice", "Bob", "Charlie"]);

        assert_eq!(svc.remove("list", 1).unwrap(), "Bob");
        assert_eq!(people(&store), vec!["Alice", "Charlie"]);
    }

    #[test]
    fn test_add_trims_and_skips_duplicates() {
        let (_temp, store, svc) = service();

        assert_eq!(svc.add("list", "  Alice ").unwrap(), AddOutcome::Added);
        assert_eq!(svc.add("list", "Alice").unwrap(), AddOutcome::AlreadyPresent);
        assert_eq!(people(&store), vec!["Alice"]);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let (_temp, _store, svc) = service();
        assert!(matches!(svc.add("list", " "), Err(RotaError::InvalidName(_))));
    }

    #[test]
    fn test_move_past_end_is_noop() {
        let (_temp, store, svc) = service();
        svc.add("list", "Alice").unwrap();
        svc.add("list", "Bob").unwrap();

        assert!(!svc.move_person("list", 0, MoveDirection::Up).unwrap());
        assert!(!svc.move_person("list", 1, MoveDirection::Down).unwrap());
        assert_eq!(people(&store), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let (_temp, _store, svc) = service();
        assert!(matches!(
            svc.remove("list", 0),
            Err(RotaError::InvalidPosition { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_edit_missing_list() {
        let (_temp, _store, svc) = service();
        assert!(matches!(
            svc.add("missing", "Alice"),
            Err(RotaError::ListNotFound(_))
        ));
    }
}
