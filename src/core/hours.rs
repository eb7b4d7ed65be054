// TimeLog Viewer - core/hours.rs
//
// Worked-hours arithmetic on `HH:MM` clock strings.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Overnight policy: an end time earlier than the start time is rejected
// (`HoursError::EndBeforeStart`) rather than wrapped to the next day.
// `hours_of` itself stays signed so callers can see the raw difference.

use crate::core::model::LogEntry;
use crate::util::constants;
use crate::util::error::HoursError;
use chrono::{NaiveTime, Timelike};

/// Parse an `HH:MM` clock string into fractional hours since midnight.
pub fn parse_clock(value: &str) -> Result<f64, HoursError> {
    let time = NaiveTime::parse_from_str(value.trim(), constants::CLOCK_FORMAT).map_err(|_| {
        HoursError::InvalidClock {
            value: value.to_string(),
        }
    })?;
    Ok(f64::from(time.hour()) + f64::from(time.minute()) / 60.0)
}

/// `(endHour + endMinute/60) - (startHour + startMinute/60)`.
///
/// Negative when `end` is earlier than `start`.
pub fn hours_of(start: &str, end: &str) -> Result<f64, HoursError> {
    Ok(parse_clock(end)? - parse_clock(start)?)
}

/// Hours worked for one entry, applying the overnight policy.
pub fn entry_hours(entry: &LogEntry) -> Result<f64, HoursError> {
    let hours = hours_of(&entry.start_time, &entry.end_time)?;
    if hours < 0.0 {
        return Err(HoursError::EndBeforeStart {
            start: entry.start_time.clone(),
            end: entry.end_time.clone(),
        });
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: &str, end: &str) -> LogEntry {
        LogEntry {
            employee: "A".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_hours_of_examples() {
        assert_eq!(hours_of("09:00", "17:30").unwrap(), 8.5);
        assert_eq!(hours_of("08:15", "08:45").unwrap(), 0.5);
        assert_eq!(hours_of("10:00", "09:00").unwrap(), -1.0);
    }

    #[test]
    fn test_zero_length_interval() {
        assert_eq!(hours_of("12:00", "12:00").unwrap(), 0.0);
        assert_eq!(entry_hours(&entry("12:00", "12:00")).unwrap(), 0.0);
    }

    #[test]
    fn test_parse_clock_rejects_malformed() {
        for bad in ["", "9", "noon", "25:00", "10:60", "10-00"] {
            assert_eq!(
                parse_clock(bad),
                Err(HoursError::InvalidClock {
                    value: bad.to_string()
                }),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_clock_tolerates_surrounding_whitespace() {
        assert_eq!(parse_clock(" 07:45 ").unwrap(), 7.75);
    }

    #[test]
    fn test_entry_hours_rejects_overnight() {
        assert_eq!(
            entry_hours(&entry("22:00", "06:00")),
            Err(HoursError::EndBeforeStart {
                start: "22:00".to_string(),
                end: "06:00".to_string(),
            })
        );
    }

    #[test]
    fn test_entry_hours_reports_bad_end_time() {
        assert!(matches!(
            entry_hours(&entry("09:00", "")),
            Err(HoursError::InvalidClock { .. })
        ));
    }
}
