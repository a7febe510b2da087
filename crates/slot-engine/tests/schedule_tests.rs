//! Tests for the availability data model and "HH:MM" validation.

use slot_engine::{parse_hhmm, DayAvailability, SlotError, TimeSlot, WeeklyAvailability};

// ── parse_hhmm ──────────────────────────────────────────────────────────────

#[test]
fn parses_valid_clock_times() {
    assert_eq!(parse_hhmm("00:00").unwrap(), 0);
    assert_eq!(parse_hhmm("09:30").unwrap(), 570);
    assert_eq!(parse_hhmm("12:00").unwrap(), 720);
    assert_eq!(parse_hhmm("23:59").unwrap(), 1439);
}

#[test]
fn rejects_malformed_clock_times() {
    for bad in ["", "9:00", "09:0", "24:00", "12:60", "12-30", "ab:cd", "09:000", " 9:00"] {
        let err = parse_hhmm(bad).unwrap_err();
        assert!(
            matches!(err, SlotError::InvalidTime(t) if t == bad),
            "{:?} should be rejected as InvalidTime",
            bad
        );
    }
}

// ── TimeSlot bounds ─────────────────────────────────────────────────────────

#[test]
fn slot_bounds_parse_to_minutes() {
    let (start, end) = TimeSlot::new("09:00", "17:30").minutes().unwrap();
    assert_eq!(start, 540);
    assert_eq!(end, 1050);
}

#[test]
fn inverted_and_zero_length_slots_are_rejected() {
    let err = TimeSlot::new("12:00", "09:00").minutes().unwrap_err();
    assert!(matches!(err, SlotError::EmptySlot { .. }));

    let err = TimeSlot::new("10:00", "10:00").minutes().unwrap_err();
    assert!(matches!(err, SlotError::EmptySlot { .. }));
}

// ── Week validation ─────────────────────────────────────────────────────────

#[test]
fn default_week_is_fully_disabled_and_valid() {
    let week = WeeklyAvailability::default();
    for day in [
        &week.monday,
        &week.tuesday,
        &week.wednesday,
        &week.thursday,
        &week.friday,
        &week.saturday,
        &week.sunday,
    ] {
        assert!(!day.enabled);
        assert!(day.time_slots.is_empty());
    }
    week.validate().unwrap();
}

#[test]
fn validate_reports_bad_slots_even_on_disabled_days() {
    let mut week = WeeklyAvailability::default();
    week.saturday = DayAvailability {
        enabled: false,
        time_slots: vec![TimeSlot::new("25:00", "26:00")],
    };

    let err = week.validate().unwrap_err();
    assert!(matches!(err, SlotError::InvalidTime(t) if t == "25:00"));
}

// ── Serde document shape ────────────────────────────────────────────────────

#[test]
fn deserializes_stored_document_shape() {
    // Partial document: absent days default to disabled, camelCase slot key.
    let doc = r#"{
        "monday": { "enabled": true, "timeSlots": [{ "start": "09:00", "end": "12:00" }] },
        "wednesday": { "enabled": false, "timeSlots": [] }
    }"#;

    let week: WeeklyAvailability = serde_json::from_str(doc).unwrap();

    assert!(week.monday.enabled);
    assert_eq!(week.monday.time_slots, vec![TimeSlot::new("09:00", "12:00")]);
    assert!(!week.wednesday.enabled);
    assert_eq!(week.sunday, DayAvailability::disabled());
}

#[test]
fn week_round_trips_through_json() {
    let mut week = WeeklyAvailability::default();
    week.friday = DayAvailability::enabled(vec![
        TimeSlot::new("08:00", "10:00"),
        TimeSlot::new("13:00", "17:00"),
    ]);

    let json = serde_json::to_string(&week).unwrap();
    let back: WeeklyAvailability = serde_json::from_str(&json).unwrap();

    assert_eq!(back, week);
}
