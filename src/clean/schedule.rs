//! Schedule Builder Module
//! Groups per-day opening hours into a deduplicated weekly schedule.

use serde::{Deserialize, Serialize};

use super::days::{day_abbr, weekday_index};
use super::hours::{parse_time_range, TimeInterval, TimeRange};

/// One schedule entry: a run of days sharing the same opening interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub days: Vec<String>,
    pub times: Vec<TimeInterval>,
}

/// Shape of one entry in the raw `hours` JSON column.
#[derive(Debug, Deserialize)]
struct RawDayHours {
    day: String,
    times: Vec<String>,
}

/// Parse the raw `hours` cell (a JSON array of day/times objects) into a
/// weekly schedule. Malformed JSON, non-array shapes and entries missing
/// their keys all degrade to an empty schedule.
pub fn schedule_from_json(raw: &str) -> Vec<DaySchedule> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "[]" {
        return Vec::new();
    }

    let Ok(serde_json::Value::Array(entries)) = serde_json::from_str(raw) else {
        return Vec::new();
    };

    let entries: Vec<(String, Vec<String>)> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<RawDayHours>(entry).ok())
        .map(|entry| (entry.day, entry.times))
        .collect();

    build_schedule(&entries)
}

/// Build the weekly schedule from (day name, time texts) pairs.
///
/// Days whose interval parses to the same value collapse into one entry.
/// Closed and unparsable days produce no entry at all.
pub fn build_schedule(entries: &[(String, Vec<String>)]) -> Vec<DaySchedule> {
    let mut groups: Vec<(TimeInterval, Vec<String>)> = Vec::new();

    for (day, times) in entries {
        // Only the first range of a day is consulted; the exports never
        // carry a second one we trust. TODO: revisit if multi-interval
        // days ever show up in the source.
        let Some(first) = times.first() else { continue };
        let interval = match parse_time_range(first) {
            Some(TimeRange::Open(interval)) => interval,
            Some(TimeRange::Closed) | None => continue,
        };

        let abbr = day_abbr(day);
        match groups.iter_mut().find(|(key, _)| *key == interval) {
            Some((_, days)) => {
                if !days.contains(&abbr) {
                    days.push(abbr);
                }
            }
            None => groups.push((interval, vec![abbr])),
        }
    }

    let mut schedule: Vec<DaySchedule> = groups
        .into_iter()
        .map(|(interval, mut days)| {
            days.sort_by_key(|d| weekday_index(d));
            DaySchedule {
                days,
                times: vec![interval],
            }
        })
        .collect();

    schedule.sort_by_key(|entry| {
        entry
            .days
            .first()
            .map_or(usize::MAX, |d| weekday_index(d))
    });
    schedule
}
