//! Show list use case: bring a list up to date and describe the current week

use crate::domain::{
    derive_week_info, next_rotation, reconcile, Clock, RotationRecord, RotationState, WeekInfo,
};
use crate::error::{Result, RotaError};
use crate::infrastructure::{FutureAnchorPolicy, RecordStore};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

/// Everything needed to display a list for the current week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub record: RotationRecord,
    pub week: WeekInfo,
    pub next_rotation: NaiveDate,
}

impl ListView {
    /// Whose turn it is, `None` when the list is empty
    pub fn current(&self) -> Option<&str> {
        self.record.current()
    }
}

/// Service for reconciling lists against the clock
pub struct RotationService<S, C> {
    store: S,
    clock: C,
    policy: FutureAnchorPolicy,
}

impl<S: RecordStore, C: Clock> RotationService<S, C> {
    pub fn new(store: S, clock: C, policy: FutureAnchorPolicy) -> Self {
        RotationService {
            store,
            clock,
            policy,
        }
    }

    /// Load a list, apply any pending rotations and persist them.
    ///
    /// The record is only written when the anchor moved.
    pub fn check(&self, id: &str) -> Result<RotationRecord> {
        self.check_at(id, self.clock.now())
    }

    /// Reconcile a list and pair it with the current week
    pub fn view(&self, id: &str) -> Result<ListView> {
        let now = self.clock.now();
        let record = self.check_at(id, now)?;

        Ok(ListView {
            next_rotation: next_rotation(&record),
            week: derive_week_info(now),
            record,
        })
    }

    fn check_at(&self, id: &str, now: DateTime<Utc>) -> Result<RotationRecord> {
        let record = self.store.load(id)?;
        let result = reconcile(&record, now);

        match result.state {
            RotationState::Current => {}
            RotationState::Advanced { weeks } => {
                self.store.save(&result.record)?;
                info!(
                    id,
                    weeks,
                    anchor = %result.record.last_rotation,
                    "rotated list"
                );
            }
            RotationState::FutureAnchor { current_monday } => match self.policy {
                FutureAnchorPolicy::Clamp => {
                    warn!(
                        id,
                        anchor = %record.last_rotation,
                        current = %current_monday,
                        "list anchor is in the future, not rotating"
                    );
                }
                FutureAnchorPolicy::Reject => {
                    return Err(RotaError::FutureAnchor {
                        anchor: record.last_rotation,
                        current: current_monday,
                    });
                }
            },
        }

        Ok(result.record)
    }
}
