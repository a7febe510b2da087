//! Boundary-point intersection of weekly schedules.
//!
//! Scans the next N calendar days; for each day, collects every slot start
//! and end across all contributing participants into a sorted set of
//! boundary points, then tests each consecutive boundary pair against each
//! participant's slots. The boundary-point method yields maximal intervals
//! of uniform coverage: no finer overlap is missed, and no emitted interval
//! spans a change in the set of free participants.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;
use crate::error::Result;
use crate::schedule::Participant;

/// A candidate meeting slot: a maximal interval during which a fixed subset
/// of the participants is free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    /// Start of the slot, anchored to a concrete calendar day.
    pub start: NaiveDateTime,
    /// End of the slot. Always after `start`.
    pub end: NaiveDateTime,
    /// Identifiers of the participants free for the whole slot, in input
    /// order. Never empty — zero-coverage intervals are not emitted.
    pub available_participants: Vec<String>,
    /// Size of the candidate pool (participants with availability data),
    /// not the size of `available_participants`.
    pub total_participants: usize,
    /// Day of week the slot falls on.
    pub day: Weekday,
    pub confidence: Confidence,
}

/// A participant's week parsed to minutes-since-midnight, one slot list per
/// weekday indexed by `Weekday::num_days_from_monday`. Disabled days are
/// stored empty.
struct ParsedWeek<'a> {
    id: &'a str,
    days: [Vec<(u16, u16)>; 7],
}

/// Compute candidate group slots over the next `horizon_days` calendar days,
/// anchored at today's local date.
///
/// See [`compute_slots_from`] for the full contract; tests and any caller
/// needing determinism should use that variant with a fixed anchor.
pub fn compute_slots(participants: &[Participant], horizon_days: i64) -> Result<Vec<CandidateSlot>> {
    compute_slots_from(participants, Local::now().date_naive(), horizon_days)
}

/// Compute candidate group slots for the `horizon_days` calendar days
/// starting at `anchor` (inclusive).
///
/// Participants without availability data are excluded up front: they
/// neither block nor contribute, and do not count toward
/// `total_participants`. An empty candidate pool or a non-positive horizon
/// yields `Ok(vec![])`.
///
/// The result is sorted ascending by `start`, and only intervals with at
/// least one free participant are emitted.
///
/// # Errors
/// Fails fast if any slot of any candidate participant is malformed
/// (`SlotError::InvalidTime`) or empty/inverted (`SlotError::EmptySlot`),
/// including slots on disabled days. No partial results are produced.
pub fn compute_slots_from(
    participants: &[Participant],
    anchor: NaiveDate,
    horizon_days: i64,
) -> Result<Vec<CandidateSlot>> {
    // Validate every candidate's week before computing anything, so bad
    // data surfaces as an error instead of silently dropping intervals.
    let weeks = parse_weeks(participants)?;
    if weeks.is_empty() || horizon_days <= 0 {
        return Ok(Vec::new());
    }
    let total = weeks.len();

    let mut slots = Vec::new();
    for offset in 0..horizon_days {
        let date = anchor + Duration::days(offset);
        let day_index = date.weekday().num_days_from_monday() as usize;

        // Distinct boundary points across every contributing slot.
        let mut boundaries: Vec<u16> = weeks
            .iter()
            .flat_map(|w| w.days[day_index].iter().flat_map(|&(s, e)| [s, e]))
            .collect();
        boundaries.sort_unstable();
        boundaries.dedup();

        for pair in boundaries.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            // A participant is free for the whole interval iff one of their
            // slots covers it end to end.
            let available: Vec<String> = weeks
                .iter()
                .filter(|w| w.days[day_index].iter().any(|&(s, e)| s <= lo && e >= hi))
                .map(|w| w.id.to_string())
                .collect();
            if available.is_empty() {
                continue;
            }

            let confidence = Confidence::from_ratio(available.len(), total);
            slots.push(CandidateSlot {
                start: date.and_time(time_of_day(lo)),
                end: date.and_time(time_of_day(hi)),
                available_participants: available,
                total_participants: total,
                day: date.weekday(),
                confidence,
            });
        }
    }

    // Days are scanned in order and boundaries are sorted within each day,
    // so this is already the production order. Sorting anyway keeps the
    // ordering guarantee independent of how the per-day loop is structured.
    slots.sort_by_key(|slot| (slot.start, slot.end));
    Ok(slots)
}

/// Filter to participants with availability data and parse their weeks,
/// validating every slot (disabled days included).
fn parse_weeks(participants: &[Participant]) -> Result<Vec<ParsedWeek<'_>>> {
    let mut weeks = Vec::new();
    for participant in participants {
        let Some(availability) = &participant.availability else {
            continue;
        };
        let mut days: [Vec<(u16, u16)>; 7] = Default::default();
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            let day = availability.day(weekday);
            let parsed: Vec<(u16, u16)> = day
                .time_slots
                .iter()
                .map(|slot| slot.minutes())
                .collect::<Result<_>>()?;
            if day.enabled {
                days[weekday.num_days_from_monday() as usize] = parsed;
            }
        }
        weeks.push(ParsedWeek {
            id: &participant.id,
            days,
        });
    }
    Ok(weeks)
}

fn time_of_day(minutes: u16) -> NaiveTime {
    // Minutes come from parse_hhmm, so the value is always below 24:00.
    NaiveTime::from_num_seconds_from_midnight_opt(u32::from(minutes) * 60, 0)
        .unwrap_or(NaiveTime::MIN)
}
