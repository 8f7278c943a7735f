//! Ordering of `"H:MM"` time-of-day strings.
//!
//! Plain string order puts `"12:00"` before `"5:00"`. Times are compared by
//! their hour, then their minute. A string that does not decompose into
//! numeric hour and minute parts is an error, never a guess.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Why a time-of-day string could not be decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time '{input}' has no ':' separator")]
    MissingSeparator { input: String },

    #[error("time '{input}' has a non-numeric hour")]
    InvalidHour { input: String },

    #[error("time '{input}' has an invalid minute (expected 00-59)")]
    InvalidMinute { input: String },
}

/// Hour and minute of a slot start.
///
/// The hour is not capped at 23: late-night listings sometimes run past
/// midnight as `"24:30"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

fn parse_digits(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hour, minute) =
            trimmed
                .split_once(':')
                .ok_or_else(|| TimeParseError::MissingSeparator {
                    input: s.to_string(),
                })?;
        let hour = parse_digits(hour).ok_or_else(|| TimeParseError::InvalidHour {
            input: s.to_string(),
        })?;
        let minute = parse_digits(minute)
            .filter(|m| *m < 60)
            .ok_or_else(|| TimeParseError::InvalidMinute {
                input: s.to_string(),
            })?;
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Compares two time-of-day strings by hour, then minute.
pub fn compare_times(a: &str, b: &str) -> Result<Ordering, TimeParseError> {
    let a: TimeOfDay = a.parse()?;
    let b: TimeOfDay = b.parse()?;
    Ok(a.cmp(&b))
}

/// Sorts time strings chronologically.
///
/// Every input is parsed before anything is sorted, so one malformed value
/// fails the whole call. Strings naming the same time (`"5:00"` and
/// `"05:00"`) keep their input order.
pub fn sort_times<'a, I>(times: I) -> Result<Vec<&'a str>, TimeParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keyed = times
        .into_iter()
        .map(|time| time.parse::<TimeOfDay>().map(|key| (key, time)))
        .collect::<Result<Vec<_>, _>>()?;
    keyed.sort_by_key(|(key, _)| *key);
    Ok(keyed.into_iter().map(|(_, time)| time).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_by_hour_then_minute() {
        assert_eq!(compare_times("5:00", "12:00"), Ok(Ordering::Less));
        assert_eq!(compare_times("12:30", "12:05"), Ok(Ordering::Greater));
        assert_eq!(compare_times("9:15", "9:15"), Ok(Ordering::Equal));
        assert_eq!(compare_times("09:15", "9:15"), Ok(Ordering::Equal));
    }

    #[test]
    fn sorts_non_lexically() {
        let sorted = sort_times(["12:00", "5:00", "5:30", "9:00"]).unwrap();
        assert_eq!(sorted, vec!["5:00", "5:30", "9:00", "12:00"]);
    }

    #[test]
    fn malformed_input_fails_loudly() {
        assert_eq!(
            compare_times("noon", "5:00"),
            Err(TimeParseError::MissingSeparator {
                input: "noon".to_string()
            })
        );
        assert!(matches!(
            compare_times("5:00", "x:00"),
            Err(TimeParseError::InvalidHour { .. })
        ));
        assert!(matches!(
            compare_times("5:7a", "5:00"),
            Err(TimeParseError::InvalidMinute { .. })
        ));
        assert!(matches!(
            "5:75".parse::<TimeOfDay>(),
            Err(TimeParseError::InvalidMinute { .. })
        ));
        assert!(matches!(
            "5:00:00".parse::<TimeOfDay>(),
            Err(TimeParseError::InvalidMinute { .. })
        ));
        assert!(sort_times(["5:00", "bad"]).is_err());
    }

    #[test]
    fn display_pads_minutes() {
        let time: TimeOfDay = "7:5".parse().unwrap();
        assert_eq!(time.to_string(), "7:05");
        let time: TimeOfDay = " 24:30 ".parse().unwrap();
        assert_eq!(time, TimeOfDay { hour: 24, minute: 30 });
    }
}
