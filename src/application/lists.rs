//! Create, enumerate and delete rotation lists

use crate::domain::{Clock, RotationRecord};
use crate::error::{Result, RotaError};
use crate::infrastructure::{ListSummary, RecordStore};
use tracing::info;
use uuid::Uuid;

/// Service for managing whole lists
pub struct ListService<S, C> {
    store: S,
    clock: C,
}

impl<S: RecordStore, C: Clock> ListService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        ListService { store, clock }
    }

    /// Create an empty list anchored to this week's Monday, returning its id
    pub fn create(&self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RotaError::InvalidName(
                "list name cannot be empty".to_string(),
            ));
        }

        let id = Uuid::new_v4().to_string();
        let today = self.clock.now().date_naive();
        let record = RotationRecord::new(id.clone(), name.to_string(), today);
        self.store.save(&record)?;

        info!(id = %id, name, anchor = %record.last_rotation, "created list");
        Ok(id)
    }

    /// All lists, sorted by name
    pub fn list(&self) -> Result<Vec<ListSummary>> {
        self.store.list()
    }

    /// Delete a list; deleting a missing list succeeds
    pub fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(id)?;
        info!(id, "deleted list");
        Ok(())
    }
}
