//! Timestamp helpers for compact `YYYYMMDDHHmmss` stamps.

use chrono::{Local, NaiveDateTime};
use thiserror::Error;

const COMPACT_FORMAT: &str = "%Y%m%d%H%M%S";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Errors that can occur while reading a timestamp.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid timestamp '{0}', expected YYYYMMDDHHmmss")]
    Invalid(String),
}

/// Parse a compact local timestamp like `20240115103000`.
fn parse_compact(time: &str) -> Result<NaiveDateTime, TimeError> {
    if time.len() != 14 || !time.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::Invalid(time.to_string()));
    }
    NaiveDateTime::parse_from_str(time, COMPACT_FORMAT)
        .map_err(|_| TimeError::Invalid(time.to_string()))
}

/// Format a compact timestamp as `YYYY-MM-DD HH:mm:ss`.
///
/// # Example
/// ```
/// # use diffmark_utils::format_time;
/// assert_eq!(format_time("20240115103000").unwrap(), "2024-01-15 10:30:00");
/// ```
pub fn format_time(time: &str) -> Result<String, TimeError> {
    Ok(parse_compact(time)?.format(DISPLAY_FORMAT).to_string())
}

/// Relative label ("5分钟前") for a compact timestamp, measured against `now`.
///
/// Each unit is floor-divided. Timestamps after `now` count as zero seconds.
pub fn short_time_at(time: &str, now: NaiveDateTime) -> Result<String, TimeError> {
    let then = parse_compact(time)?;
    let seconds = (now - then).num_seconds().max(0);

    let label = if seconds < MINUTE {
        format!("{}秒前", seconds)
    } else if seconds < HOUR {
        format!("{}分钟前", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{}小时前", seconds / HOUR)
    } else {
        format!("{}天前", seconds / DAY)
    };
    Ok(label)
}

/// Relative label for a compact timestamp, measured against local now.
pub fn short_time(time: &str) -> Result<String, TimeError> {
    short_time_at(time, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("20240115120000", COMPACT_FORMAT).unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("20240115103000").unwrap(), "2024-01-15 10:30:00");
        assert_eq!(format_time("19991231235959").unwrap(), "1999-12-31 23:59:59");
    }

    #[test]
    fn test_format_time_invalid() {
        assert_eq!(
            format_time("2024-01-15"),
            Err(TimeError::Invalid("2024-01-15".to_string()))
        );
        assert!(format_time("").is_err());
        assert!(format_time("20241315103000").is_err()); // month 13
        assert!(format_time("202401151030001").is_err());
    }

    #[test]
    fn test_short_time_thresholds() {
        assert_eq!(short_time_at("20240115120000", now()).unwrap(), "0秒前");
        assert_eq!(short_time_at("20240115115901", now()).unwrap(), "59秒前");
        assert_eq!(short_time_at("20240115115900", now()).unwrap(), "1分钟前");
        assert_eq!(short_time_at("20240115110001", now()).unwrap(), "59分钟前");
        assert_eq!(short_time_at("20240115110000", now()).unwrap(), "1小时前");
        assert_eq!(short_time_at("20240114120001", now()).unwrap(), "23小时前");
        assert_eq!(short_time_at("20240114120000", now()).unwrap(), "1天前");
        assert_eq!(short_time_at("20240105120000", now()).unwrap(), "10天前");
    }

    #[test]
    fn test_short_time_future_clamps() {
        assert_eq!(short_time_at("20240115120500", now()).unwrap(), "0秒前");
    }

    #[test]
    fn test_short_time_invalid() {
        assert!(short_time("yesterday").is_err());
    }
}
