//! Injectable time source

use crate::error::{Result, RotaError};
use chrono::{DateTime, NaiveDate, Utc};

/// Supplies the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Parse an RFC 3339 timestamp or a YYYY-MM-DD date (midnight UTC)
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(FixedClock(instant.with_timezone(&Utc)));
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| FixedClock(midnight.and_utc()))
            .ok_or_else(|| RotaError::InvalidDateTime(input.to_string()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
