//! Opening Day Resolver Module
//! The fixed weekday vocabulary and the inversion of "closed on" specs.

/// Canonical week, Monday first.
pub const ALL_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Three-letter abbreviations, index-aligned with [`ALL_DAYS`].
pub const ALL_DAYS_ABBR: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Marker meaning no closed days at all.
const OPEN_ALL_DAYS: &str = "Open All Days";

/// Map a full day name to its abbreviation; unknown names fall back to
/// their lower-cased 3-character prefix.
pub fn day_abbr(day: &str) -> String {
    match ALL_DAYS.iter().position(|d| *d == day) {
        Some(i) => ALL_DAYS_ABBR[i].to_string(),
        None => day.to_lowercase().chars().take(3).collect(),
    }
}

/// Position of an abbreviation in the canonical week; unknown sorts last.
pub fn weekday_index(abbr: &str) -> usize {
    ALL_DAYS_ABBR
        .iter()
        .position(|d| *d == abbr)
        .unwrap_or(ALL_DAYS_ABBR.len())
}

fn full_week() -> Vec<String> {
    ALL_DAYS_ABBR.iter().map(|d| d.to_string()).collect()
}

/// Invert a "closed on" spec into the set of open days.
///
/// Accepts the open-all-days marker, a JSON array of full day names, or
/// nothing at all. Anything unparsable resolves to the full week, and a spec
/// that closes every single day also falls back to the full week rather than
/// an empty set (source data marks permanently closed listings elsewhere).
pub fn opening_days(closed_on: &str) -> Vec<String> {
    let closed_on = closed_on.trim();
    if closed_on.is_empty() || closed_on == OPEN_ALL_DAYS {
        return full_week();
    }

    let Ok(serde_json::Value::Array(entries)) = serde_json::from_str(closed_on) else {
        return full_week();
    };

    // Entries outside the vocabulary are dropped, not prefix-abbreviated.
    let closed: Vec<String> = entries
        .iter()
        .filter_map(|v| v.as_str())
        .filter(|d| ALL_DAYS.contains(d))
        .map(day_abbr)
        .collect();

    let open: Vec<String> = ALL_DAYS_ABBR
        .iter()
        .filter(|abbr| !closed.iter().any(|c| c == *abbr))
        .map(|abbr| abbr.to_string())
        .collect();

    if open.is_empty() {
        full_week()
    } else {
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_all_days_marker_gives_full_week() {
        assert_eq!(opening_days("Open All Days"), ALL_DAYS_ABBR.to_vec());
    }

    #[test]
    fn empty_spec_gives_full_week() {
        assert_eq!(opening_days(""), ALL_DAYS_ABBR.to_vec());
        assert_eq!(opening_days("   "), ALL_DAYS_ABBR.to_vec());
    }

    #[test]
    fn closed_days_are_subtracted() {
        assert_eq!(
            opening_days(r#"["Monday","Tuesday"]"#),
            vec!["wed", "thu", "fri", "sat", "sun"]
        );
    }

    #[test]
    fn unknown_entries_are_dropped_not_abbreviated() {
        // "Funday" is not a weekday, so nothing is subtracted for it.
        assert_eq!(
            opening_days(r#"["Funday","Sunday"]"#),
            vec!["mon", "tue", "wed", "thu", "fri", "sat"]
        );
    }

    #[test]
    fn closed_every_day_falls_back_to_full_week() {
        let spec = serde_json::to_string(&ALL_DAYS.to_vec()).unwrap();
        assert_eq!(opening_days(&spec), ALL_DAYS_ABBR.to_vec());
    }

    #[test]
    fn unparsable_spec_falls_back_to_full_week() {
        assert_eq!(opening_days("every other tuesday"), ALL_DAYS_ABBR.to_vec());
        assert_eq!(opening_days(r#"{"closed":"Monday"}"#), ALL_DAYS_ABBR.to_vec());
    }

    #[test]
    fn day_abbr_falls_back_to_prefix() {
        assert_eq!(day_abbr("Wednesday"), "wed");
        assert_eq!(day_abbr("Rehearsal"), "reh");
    }

    #[test]
    fn weekday_index_sorts_unknowns_last() {
        assert_eq!(weekday_index("mon"), 0);
        assert_eq!(weekday_index("sun"), 6);
        assert_eq!(weekday_index("xyz"), 7);
    }
}
