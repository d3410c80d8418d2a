//! Rotation record model and its persisted encoding

use crate::domain::week::monday_of;
use crate::error::{Result, RotaError};
use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named queue of people rotating weekly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationRecord {
    pub id: String,
    pub name: String,
    /// Monday through which rotation has already been applied
    pub last_rotation: NaiveDate,
    pub people: Vec<String>,
}

/// Anchor as found on disk.
///
/// Older files stored the anchor as epoch milliseconds of Monday's local
/// midnight. Those are read on the UTC calendar and snapped to a Monday:
/// a UTC Sunday (local midnight east of UTC) maps to the following Monday,
/// any other weekday to the Monday of its own week.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StoredAnchor {
    LegacyInstant(i64),
    /// Epoch milliseconds written as a JSON float
    LegacyFractional(f64),
    CalendarDate(String),
}

impl StoredAnchor {
    /// Normalize to a calendar date that is a Monday
    pub fn to_date(&self) -> Result<NaiveDate> {
        match self {
            StoredAnchor::LegacyInstant(millis) => legacy_monday(*millis),
            StoredAnchor::LegacyFractional(millis) => {
                if !millis.is_finite() || millis.fract() != 0.0 {
                    return Err(RotaError::InvalidAnchor(format!(
                        "legacy timestamp {} is not a whole number of milliseconds",
                        millis
                    )));
                }
                if *millis < i64::MIN as f64 || *millis > i64::MAX as f64 {
                    return Err(RotaError::InvalidAnchor(format!(
                        "timestamp {} is out of range",
                        millis
                    )));
                }
                legacy_monday(*millis as i64)
            }
            StoredAnchor::CalendarDate(text) => {
                let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
                    RotaError::InvalidAnchor(format!("'{}' is not a YYYY-MM-DD date", text))
                })?;

                if date.weekday() != Weekday::Mon {
                    return Err(RotaError::InvalidAnchor(format!(
                        "{} is a {:?}, expected a Monday",
                        date,
                        date.weekday()
                    )));
                }
                Ok(date)
            }
        }
    }
}

fn legacy_monday(millis: i64) -> Result<NaiveDate> {
    let date = DateTime::from_timestamp_millis(millis)
        .map(|instant| instant.date_naive())
        .ok_or_else(|| RotaError::InvalidAnchor(format!("timestamp {} is out of range", millis)))?;

    match date.weekday() {
        Weekday::Sun => date.succ_opt().ok_or_else(|| {
            RotaError::InvalidAnchor(format!("timestamp {} is out of range", millis))
        }),
        _ => Ok(monday_of(date)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: String,
    name: String,
    last_rotation: StoredAnchor,
    #[serde(default)]
    people: Vec<String>,
}

impl TryFrom<StoredRecord> for RotationRecord {
    type Error = RotaError;

    fn try_from(stored: StoredRecord) -> Result<Self> {
        Ok(RotationRecord {
            last_rotation: stored.last_rotation.to_date()?,
            id: stored.id,
            name: stored.name,
            people: stored.people,
        })
    }
}

/// Direction for reordering a person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl FromStr for MoveDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(MoveDirection::Up),
            "down" => Ok(MoveDirection::Down),
            _ => Err(format!(
                "Invalid direction: '{}'. Valid directions are: up, down",
                s
            )),
        }
    }
}

impl RotationRecord {
    /// Decode a stored JSON record, keeping anchor problems distinct from
    /// malformed JSON
    pub fn decode(json: &str) -> Result<Self> {
        let stored: StoredRecord = serde_json::from_str(json)?;
        RotationRecord::try_from(stored)
    }

    /// Create an empty list anchored to the Monday of `today`'s week
    pub fn new(id: String, name: String, today: NaiveDate) -> Self {
        RotationRecord {
            id,
            name,
            last_rotation: monday_of(today),
            people: Vec::new(),
        }
    }

    /// Whose turn it is, `None` when the list is empty
    pub fn current(&self) -> Option<&str> {
        self.people.first().map(String::as_str)
    }

    /// Append a person; exact duplicates are rejected
    pub fn add_person(&mut self, person: &str) -> Result<()> {
        if self.people.iter().any(|p| p == person) {
            return Err(RotaError::DuplicatePerson(person.to_string()));
        }
        self.people.push(person.to_string());
        Ok(())
    }

    /// Remove the person at `index`, returning their name
    pub fn remove_person(&mut self, index: usize) -> Result<String> {
        self.check_position(index)?;
        Ok(self.people.remove(index))
    }

    /// Swap the person at `index` with a neighbour.
    ///
    /// Returns `false` when the move would run past either end of the list.
    pub fn move_person(&mut self, index: usize, direction: MoveDirection) -> Result<bool> {
        self.check_position(index)?;

        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|&i| i < self.people.len()),
        };

        match target {
            Some(target) => {
                self.people.swap(index, target);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn check_position(&self, index: usize) -> Result<()> {
        if index >= self.people.len() {
            return Err(RotaError::InvalidPosition {
                index,
                len: self.people.len(),
            });
        }
        Ok(())
    }
}
