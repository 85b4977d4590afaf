//! Time utilities: parsing visit timestamps, browser epochs, formatting spans.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};

const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Chrome/WebKit timestamps: microseconds since 1601-01-01.
pub fn chrome_time_to_datetime(micros: i64) -> Option<NaiveDateTime> {
    let base = NaiveDate::from_ymd_opt(1601, 1, 1)?.and_hms_opt(0, 0, 0)?;
    base.checked_add_signed(TimeDelta::microseconds(micros))
}

/// Safari timestamps: seconds (fractional) since 2001-01-01.
pub fn safari_time_to_datetime(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(2001, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let micros = (seconds * 1_000_000.0).round() as i64;
    base.checked_add_signed(TimeDelta::microseconds(micros))
}

/// Parse a `visit_time` cell.
///
/// Accepts RFC 3339 (offset dropped, wall clock kept), the common
/// `YYYY-MM-DD HH:MM[:SS[.f]]` shapes, any `extra` chrono formats, and bare
/// integers as Chrome microseconds.
pub fn parse_visit_time(raw: &str, extra: &[String]) -> AppResult<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AppError::InvalidTimestamp("empty".into()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    let formats = FORMATS.iter().copied().chain(extra.iter().map(String::as_str));
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    if let Ok(micros) = s.parse::<i64>()
        && let Some(dt) = chrome_time_to_datetime(micros)
    {
        return Ok(dt);
    }

    Err(AppError::InvalidTimestamp(s.to_string()))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Fractional minutes as text, e.g. `42.5` → `42m 30s`.
pub fn format_minutes(mins: f64) -> String {
    let total_secs = (mins * 60.0).round() as i64;
    format!("{:02}m {:02}s", total_secs / 60, total_secs % 60)
}
