//! Start-time parsing and human-readable date/time formatting.
//!
//! Event start times arrive as strings and are parsed leniently: RFC 3339
//! first, then an offset-less `YYYY-MM-DDTHH:MM:SS`, then a bare date.
//! Parse failures never propagate; callers substitute the placeholder
//! constants and keep going.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Placeholder used in summaries when the start time has no parseable date.
pub const UNSPECIFIED_DATE: &str = "an unspecified date";

/// Placeholder used in summaries when the start time has no parseable time.
pub const UNSPECIFIED_TIME: &str = "an unspecified time";

/// Parse an event start-time string.
///
/// Accepts RFC 3339 (offset preserved, so formatting stays in the event's
/// own wall-clock), offset-less `YYYY-MM-DDTHH:MM:SS` (treated as UTC), and
/// bare `YYYY-MM-DD` (midnight UTC). Anything else is `None`.
pub fn parse_start_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains('T') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc).fixed_offset());
        }
        return None;
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc).fixed_offset())
}

/// "Tuesday, September 15"
pub fn format_event_date(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%A, %B %-d").to_string()
}

/// "3:00 PM"
pub fn format_event_time(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// "Tuesday, September 15, 2026 at 3:00 PM" (model-prompt form).
pub fn format_event_full(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%A, %B %-d, %Y at %-I:%M %p").to_string()
}

/// How soon an event lands relative to "today", for urgency-ranked tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayUrgency {
    Today,
    Tomorrow,
    Upcoming,
}

/// Rank an event date against a reference date. Unparseable dates rank as
/// `Upcoming` so they still get a generic reminder tip.
pub fn day_urgency(event_date: Option<NaiveDate>, today: NaiveDate) -> DayUrgency {
    let Some(date) = event_date else {
        return DayUrgency::Upcoming;
    };
    if date == today {
        DayUrgency::Today
    } else if Some(date) == today.succ_opt() {
        DayUrgency::Tomorrow
    } else {
        DayUrgency::Upcoming
    }
}
