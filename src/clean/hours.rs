//! Time Range Parser Module
//! Turns free-text opening-hour intervals into 24-hour clock pairs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Note attached to the canonical always-open interval.
pub const OPEN_24_HOURS_NOTE: &str = "Open 24 hours";

/// A single start/end pair on the 24-hour clock, both zero-padded `HH:MM`.
///
/// `note` is only present for the always-open sentinel interval. Equality is
/// structural, which is what the schedule builder groups by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Outcome of parsing one interval description. A day marked closed is a
/// valid parse, just one that produces no schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRange {
    Open(TimeInterval),
    Closed,
}

// hour[:minute] [am|pm] - hour[:minute] [am|pm], whitespace-tolerant
static TIME_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s*-\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)?")
        .expect("valid time range regex")
});

/// Parse a free-text interval like `"6 pm-12 am"` or `"4:30-8:30 pm"`.
///
/// Returns `None` when nothing resembling a time range is found. End times
/// that land numerically before the start (ranges crossing midnight) are kept
/// as literal clock values.
pub fn parse_time_range(text: &str) -> Option<TimeRange> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.contains("Open 24 hours") || text.contains("24 hours") {
        return Some(TimeRange::Open(TimeInterval {
            start: "00:00".to_string(),
            end: "23:59".to_string(),
            note: Some(OPEN_24_HOURS_NOTE.to_string()),
        }));
    }

    if text.contains("Closed") {
        return Some(TimeRange::Closed);
    }

    let caps = TIME_RANGE_RE.captures(text)?;
    let start_hour: u32 = caps[1].parse().ok()?;
    let start_min: u32 = caps.get(2).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
    let mut start_ampm = meridiem(caps.get(3).map(|m| m.as_str()));

    let end_hour: u32 = caps[4].parse().ok()?;
    let end_min: u32 = caps.get(5).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
    let end_ampm = meridiem(caps.get(6).map(|m| m.as_str()));

    // Night-market listings often only write the closing meridiem
    // ("6-10 pm"); the start side inherits it.
    if start_ampm.is_empty() && !end_ampm.is_empty() {
        start_ampm = end_ampm.clone();
    }

    let start_hour = to_24_hour(start_hour, &start_ampm);
    let end_hour = to_24_hour(end_hour, &end_ampm);

    Some(TimeRange::Open(TimeInterval {
        start: format!("{start_hour:02}:{start_min:02}"),
        end: format!("{end_hour:02}:{end_min:02}"),
        note: None,
    }))
}

fn meridiem(capture: Option<&str>) -> String {
    capture.map(|m| m.to_lowercase()).unwrap_or_default()
}

/// 12-hour to 24-hour conversion; "12 am" is midnight, so an end time of
/// literal "12 am" comes out as hour 0.
fn to_24_hour(hour: u32, ampm: &str) -> u32 {
    if ampm == "pm" && hour != 12 {
        hour + 12
    } else if ampm == "am" && hour == 12 {
        0
    } else {
        hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(start: &str, end: &str) -> Option<TimeRange> {
        Some(TimeRange::Open(TimeInterval {
            start: start.to_string(),
            end: end.to_string(),
            note: None,
        }))
    }

    #[test]
    fn parses_pm_to_midnight() {
        assert_eq!(parse_time_range("6 pm-12 am"), open("18:00", "00:00"));
    }

    #[test]
    fn infers_start_meridiem_from_end() {
        assert_eq!(parse_time_range("4:30-8:30 pm"), open("16:30", "20:30"));
        assert_eq!(parse_time_range("6-10 pm"), open("18:00", "22:00"));
    }

    #[test]
    fn parses_explicit_meridiems() {
        assert_eq!(parse_time_range("9 am - 5 pm"), open("09:00", "17:00"));
        assert_eq!(parse_time_range("11:15 AM-2:45 PM"), open("11:15", "14:45"));
    }

    #[test]
    fn noon_is_not_bumped_by_pm() {
        assert_eq!(parse_time_range("12 pm-3 pm"), open("12:00", "15:00"));
    }

    #[test]
    fn bare_hours_stay_literal() {
        assert_eq!(parse_time_range("10-6"), open("10:00", "06:00"));
    }

    #[test]
    fn open_24_hours_gets_sentinel_note() {
        let expected = Some(TimeRange::Open(TimeInterval {
            start: "00:00".to_string(),
            end: "23:59".to_string(),
            note: Some(OPEN_24_HOURS_NOTE.to_string()),
        }));
        assert_eq!(parse_time_range("Open 24 hours"), expected);
        assert_eq!(parse_time_range("open daily, 24 hours"), expected);
    }

    #[test]
    fn closed_marker_is_its_own_outcome() {
        assert_eq!(parse_time_range("Closed"), Some(TimeRange::Closed));
    }

    #[test]
    fn unparsable_text_yields_none() {
        assert_eq!(parse_time_range(""), None);
        assert_eq!(parse_time_range("ask at the stall"), None);
        assert_eq!(parse_time_range("evenings only"), None);
    }

    #[test]
    fn interval_note_is_omitted_from_json_when_absent() {
        let Some(TimeRange::Open(interval)) = parse_time_range("6 pm-12 am") else {
            panic!("expected an open interval");
        };
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(json, r#"{"start":"18:00","end":"00:00"}"#);
    }
}
