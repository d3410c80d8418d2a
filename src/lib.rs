//! rota - Weekly rotation lists
//!
//! Keeps named queues of people anchored to ISO weeks and rotates them by
//! the number of whole weeks that have passed since their last rotation.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RotaError;
