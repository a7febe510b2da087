//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time of day: {0:?} (expected \"HH:MM\")")]
    InvalidTime(String),

    #[error("Empty or inverted time slot: {start} >= {end}")]
    EmptySlot { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, SlotError>;
