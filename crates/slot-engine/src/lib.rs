//! # slot-engine
//!
//! Group availability intersection for scheduling applications.
//!
//! Given each participant's weekly availability (per-day enabled flags and
//! `"HH:MM"` clock-time windows), the engine scans the next N calendar days
//! and produces candidate meeting slots: maximal intervals during which a
//! fixed subset of participants is free, annotated with who is free and a
//! coarse confidence tier.
//!
//! The computation is a pure function of its inputs and an anchor date. It
//! performs no I/O, keeps no state, and never mutates its inputs; where the
//! callers' availability data is malformed it fails fast rather than
//! producing partial or silently wrong output.
//!
//! ## Modules
//!
//! - [`schedule`] — weekly availability data model and `"HH:MM"` validation
//! - [`intersect`] — boundary-point intersection across participants
//! - [`confidence`] — high/medium/low tier rule
//! - [`error`] — error types

pub mod confidence;
pub mod error;
pub mod intersect;
pub mod schedule;

pub use confidence::Confidence;
pub use error::SlotError;
pub use intersect::{compute_slots, compute_slots_from, CandidateSlot};
pub use schedule::{parse_hhmm, DayAvailability, Participant, TimeSlot, WeeklyAvailability};
