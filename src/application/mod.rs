//! Application layer - Use cases and orchestration

pub mod init;
pub mod lists;
pub mod manage_config;
pub mod people;
pub mod rotation;

pub use lists::ListService;
pub use manage_config::ConfigService;
pub use people::{AddOutcome, PeopleService};
pub use rotation::{ListView, RotationService};
