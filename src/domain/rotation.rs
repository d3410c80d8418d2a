//! Weekly rotation of a record's queue

use crate::domain::record::RotationRecord;
use crate::domain::week::monday_of;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// How a record related to the current week before reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    /// Anchor is this week's Monday (or less than a week behind)
    Current,
    /// Anchor was behind by this many whole weeks and has been advanced
    Advanced { weeks: i64 },
    /// Anchor lies after this week's Monday; nothing was changed
    FutureAnchor { current_monday: NaiveDate },
}

/// Result of bringing a record up to date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub record: RotationRecord,
    pub state: RotationState,
}

impl Reconciliation {
    /// Whether the record differs from its stored form and must be saved
    pub fn changed(&self) -> bool {
        matches!(self.state, RotationState::Advanced { .. })
    }
}

/// Whole weeks between `anchor` and the Monday of the week containing `now`.
///
/// Negative when the anchor lies in the future.
pub fn elapsed_weeks(anchor: NaiveDate, now: DateTime<Utc>) -> i64 {
    let current_monday = monday_of(now.date_naive());
    (current_monday - anchor).num_days().div_euclid(7)
}

/// Bring `record` up to date with `now`.
///
/// Each elapsed week moves the head of the queue to the back. The anchor
/// advances by exactly the elapsed weeks so the cadence never drifts.
pub fn reconcile(record: &RotationRecord, now: DateTime<Utc>) -> Reconciliation {
    let weeks = elapsed_weeks(record.last_rotation, now);

    let state = match weeks {
        0 => RotationState::Current,
        w if w < 0 => RotationState::FutureAnchor {
            current_monday: monday_of(now.date_naive()),
        },
        w => RotationState::Advanced { weeks: w },
    };

    let RotationState::Advanced { weeks } = state else {
        return Reconciliation {
            record: record.clone(),
            state,
        };
    };

    let mut updated = record.clone();
    updated.people = rotate_left(&record.people, weeks);
    updated.last_rotation = record.last_rotation + Duration::weeks(weeks);

    Reconciliation {
        record: updated,
        state,
    }
}

/// Date on which the next rotation takes effect
pub fn next_rotation(record: &RotationRecord) -> NaiveDate {
    record.last_rotation + Duration::days(7)
}

/// `people[k..] ++ people[..k]` with `k = steps mod len`
fn rotate_left(people: &[String], steps: i64) -> Vec<String> {
    if people.len() < 2 {
        return people.to_vec();
    }

    let k = steps.rem_euclid(people.len() as i64) as usize;
    people[k..].iter().chain(&people[..k]).cloned().collect()
}
