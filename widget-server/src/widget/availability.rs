//! Contact availability windows
//!
//! Pure wall-clock checks of optional `HH:MM` bounds. No timezone logic
//! here; callers pass the `now` they care about.

use chrono::{NaiveTime, Timelike};

fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Whether a contact is inside its availability window at `now`.
///
/// Either bound absent means always available. When both are present they
/// must parse as `%H:%M`; an unparseable bound never matches. The check is
/// inclusive at minute resolution (seconds on `now` are ignored). A window
/// whose start is after its end matches nothing; overnight windows are not
/// supported.
pub fn is_available(now: NaiveTime, start: Option<&str>, end: Option<&str>) -> bool {
    let (Some(start), Some(end)) = (start, end) else {
        return true;
    };
    let (Some(start), Some(end)) = (parse_hhmm(start), parse_hhmm(end)) else {
        return false;
    };
    let now = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now);
    start <= now && now <= end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_no_window_is_always_available() {
        assert!(is_available(at(3, 30), None, None));
        assert!(is_available(at(23, 59), None, None));
    }

    #[test]
    fn test_single_bound_is_always_available() {
        assert!(is_available(at(12, 0), Some("10:00"), None));
        assert!(is_available(at(12, 0), None, Some("19:00")));
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let start = Some("10:00");
        let end = Some("19:00");
        assert!(!is_available(at(9, 59), start, end));
        assert!(is_available(at(10, 0), start, end));
        assert!(is_available(at(14, 30), start, end));
        assert!(is_available(at(19, 0), start, end));
        assert!(!is_available(at(19, 1), start, end));
    }

    #[test]
    fn test_seconds_are_ignored() {
        let now = NaiveTime::from_hms_opt(19, 0, 45).unwrap();
        assert!(is_available(now, Some("10:00"), Some("19:00")));
    }

    #[test]
    fn test_unparseable_bound_never_matches() {
        assert!(!is_available(at(12, 0), Some("ab:cd"), Some("19:00")));
        assert!(!is_available(at(12, 0), Some("10:00"), Some("xx")));
        assert!(!is_available(at(12, 0), Some("25:00"), Some("26:00")));
    }

    #[test]
    fn test_overnight_window_matches_nothing() {
        let start = Some("22:00");
        let end = Some("06:00");
        assert!(!is_available(at(23, 0), start, end));
        assert!(!is_available(at(5, 0), start, end));
        assert!(!is_available(at(12, 0), start, end));
    }
}
