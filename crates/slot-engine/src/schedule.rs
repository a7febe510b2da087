//! The weekly availability data model.
//!
//! Mirrors the shape availability documents take in the backing document
//! store: seven named day fields, each holding an enabled flag and a list of
//! `"HH:MM"` clock-time slots. Strings are kept on the wire for serde
//! compatibility, but all comparison and arithmetic happen on parsed
//! minutes-since-midnight, never on the strings themselves.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Parse a `"HH:MM"` clock time into minutes since midnight.
///
/// Strict format: exactly five characters, two-digit zero-padded hour and
/// minute separated by `:`, hour in `00..=23`, minute in `00..=59`.
///
/// # Errors
/// Returns `SlotError::InvalidTime` for any string outside that format.
pub fn parse_hhmm(time: &str) -> Result<u16> {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(SlotError::InvalidTime(time.to_string()));
    }
    let digits = |a: u8, b: u8| -> Option<u16> {
        if a.is_ascii_digit() && b.is_ascii_digit() {
            Some(u16::from(a - b'0') * 10 + u16::from(b - b'0'))
        } else {
            None
        }
    };
    let hour = digits(bytes[0], bytes[1]);
    let minute = digits(bytes[3], bytes[4]);
    match (hour, minute) {
        (Some(h), Some(m)) if h < 24 && m < 60 => Ok(h * 60 + m),
        _ => Err(SlotError::InvalidTime(time.to_string())),
    }
}

/// A single same-day availability window, e.g. `09:00`–`12:00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start of the window, `"HH:MM"` 24-hour clock.
    pub start: String,
    /// End of the window, `"HH:MM"` 24-hour clock. Must be after `start`.
    pub end: String,
}

impl TimeSlot {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        TimeSlot {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parsed and validated `(start, end)` bounds in minutes since midnight.
    ///
    /// # Errors
    /// `SlotError::InvalidTime` if either endpoint is malformed,
    /// `SlotError::EmptySlot` if the window is empty or inverted.
    pub fn minutes(&self) -> Result<(u16, u16)> {
        let start = parse_hhmm(&self.start)?;
        let end = parse_hhmm(&self.end)?;
        if start >= end {
            return Err(SlotError::EmptySlot {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }
        Ok((start, end))
    }
}

/// Availability for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// When false the day contributes nothing, whatever `time_slots` holds.
    pub enabled: bool,
    #[serde(default, rename = "timeSlots")]
    pub time_slots: Vec<TimeSlot>,
}

impl DayAvailability {
    /// A day off: disabled, no slots. Serde default for absent day fields.
    pub fn disabled() -> Self {
        DayAvailability {
            enabled: false,
            time_slots: Vec::new(),
        }
    }

    pub fn enabled(time_slots: Vec<TimeSlot>) -> Self {
        DayAvailability {
            enabled: true,
            time_slots,
        }
    }
}

impl Default for DayAvailability {
    fn default() -> Self {
        DayAvailability::disabled()
    }
}

/// A full week of availability, one field per weekday.
///
/// A closed structure rather than a string-keyed map, so a missing or
/// misspelled day is a compile error instead of silent absence. Absent day
/// fields in stored documents deserialize as [`DayAvailability::disabled`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    #[serde(default)]
    pub monday: DayAvailability,
    #[serde(default)]
    pub tuesday: DayAvailability,
    #[serde(default)]
    pub wednesday: DayAvailability,
    #[serde(default)]
    pub thursday: DayAvailability,
    #[serde(default)]
    pub friday: DayAvailability,
    #[serde(default)]
    pub saturday: DayAvailability,
    #[serde(default)]
    pub sunday: DayAvailability,
}

impl WeeklyAvailability {
    /// The availability entry for a given weekday.
    pub fn day(&self, weekday: Weekday) -> &DayAvailability {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Check every slot of every day, enabled or not.
    ///
    /// The engine runs this before computing anything so that malformed
    /// data fails the whole call instead of silently miscomputing.
    ///
    /// # Errors
    /// The first `SlotError` found, scanning Monday through Sunday.
    pub fn validate(&self) -> Result<()> {
        for day in [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
        ] {
            for slot in &day.time_slots {
                slot.minutes()?;
            }
        }
        Ok(())
    }
}

/// One person whose weekly schedule contributes to group-slot computation.
///
/// A participant with no availability record is excluded from intersection
/// entirely: they neither block nor contribute slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Opaque identifier, typically an email address.
    pub id: String,
    pub availability: Option<WeeklyAvailability>,
}

impl Participant {
    pub fn new(id: impl Into<String>, availability: WeeklyAvailability) -> Self {
        Participant {
            id: id.into(),
            availability: Some(availability),
        }
    }

    /// A participant with no availability record.
    pub fn without_availability(id: impl Into<String>) -> Self {
        Participant {
            id: id.into(),
            availability: None,
        }
    }
}
