//! Domain layer - Business logic and domain models

pub mod clock;
pub mod record;
pub mod rotation;
pub mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use record::{MoveDirection, RotationRecord, StoredAnchor};
pub use rotation::{next_rotation, reconcile, Reconciliation, RotationState};
pub use week::{derive_week_info, monday_of, WeekInfo};
