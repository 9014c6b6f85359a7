//! Start-time recovery and `MM:SS` → absolute instant conversion.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Timelike};

/// Calendar layout of the first log line, e.g. `Friday, November 09, 2018 12:22:07`.
pub const HEADER_FORMAT: &str = "%A, %B %d, %Y %H:%M:%S";

const HEADER_LABEL: &str = "Log Started at ";
const TIMEZONE_MARKER: &str = "g_timezone";
const TIMEZONE_FIELD_WIDTH: usize = 5;

/// A minute:second reading as printed by the engine (`<05:30>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    pub fn new(minute: u32, second: u32) -> AppResult<Self> {
        if minute > 59 || second > 59 {
            return Err(AppError::InvalidClockReading(format!(
                "{minute:02}:{second:02}"
            )));
        }
        Ok(Self { minute, second })
    }

    /// Parse `MM:SS`. Anything that is not two 2-digit fields returns `None`;
    /// well-shaped but out-of-range values are an error.
    pub fn parse(s: &str) -> Option<AppResult<Self>> {
        let (m, sec) = s.split_once(':')?;
        if m.len() != 2 || sec.len() != 2 {
            return None;
        }
        if !m.bytes().chain(sec.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        let minute = m.parse().ok()?;
        let second = sec.parse().ok()?;
        Some(Self::new(minute, second))
    }
}

/// Read the `g_timezone` cvar: the marker, one separator character, then a
/// signed integer inside a fixed-width window.
pub fn parse_utc_offset(log_data: &str) -> AppResult<i32> {
    let idx = log_data
        .find(TIMEZONE_MARKER)
        .ok_or_else(|| AppError::MalformedHeader(format!("'{TIMEZONE_MARKER}' not found")))?;

    let field: String = log_data[idx + TIMEZONE_MARKER.len()..]
        .chars()
        .skip(1)
        .take(TIMEZONE_FIELD_WIDTH)
        .take_while(|c| *c != '\n')
        .collect();

    let digits_end = field
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(field.len());

    let hours: i32 = field[..digits_end]
        .parse()
        .map_err(|_| AppError::MalformedHeader(format!("bad timezone field '{}'", field.trim())))?;

    if !(-12..=14).contains(&hours) {
        return Err(AppError::MalformedHeader(format!(
            "timezone offset out of range: {hours}"
        )));
    }

    Ok(hours)
}

/// Local (offset-less) engine start time from the first line of the log.
pub fn parse_local_start(log_data: &str) -> AppResult<NaiveDateTime> {
    let first_line = log_data.lines().next().unwrap_or("").trim();
    let stamp = first_line
        .strip_prefix(HEADER_LABEL)
        .unwrap_or(first_line)
        .trim();

    NaiveDateTime::parse_from_str(stamp, HEADER_FORMAT)
        .map_err(|_| AppError::MalformedHeader(format!("unrecognised start line '{first_line}'")))
}

/// Engine start instant and its UTC offset in hours.
pub fn resolve_start_time(log_data: &str) -> AppResult<(DateTime<FixedOffset>, i32)> {
    let hours = parse_utc_offset(log_data)?;
    let local = parse_local_start(log_data)?;

    let offset = FixedOffset::east_opt(hours * 3600)
        .ok_or_else(|| AppError::MalformedHeader(format!("invalid offset {hours}")))?;

    let start = offset
        .from_local_datetime(&local)
        .single()
        .ok_or_else(|| AppError::MalformedHeader(format!("ambiguous start time {local}")))?;

    Ok((start, hours))
}

/// Turn a reading into an absolute instant relative to `start`.
///
/// Minute and second replace those of `start`; a result earlier than
/// `start` means the clock wrapped past the hour, so one hour is added.
/// Only a single wrap can be detected.
pub fn resolve_clock(start: DateTime<FixedOffset>, reading: ClockReading) -> DateTime<FixedOffset> {
    // Both fields were range-checked in ClockReading::new.
    let replaced = start
        .with_nanosecond(0)
        .and_then(|t| t.with_minute(reading.minute))
        .and_then(|t| t.with_second(reading.second))
        .unwrap_or(start);

    if replaced < start {
        replaced + Duration::hours(1)
    } else {
        replaced
    }
}

/// Leading `<MM:SS>` of a log line, if any.
pub fn leading_reading(line: &str) -> Option<AppResult<ClockReading>> {
    let rest = line.trim_start().strip_prefix('<')?;
    let (inner, _) = rest.split_once('>')?;
    ClockReading::parse(inner)
}

/// Every `<MM:SS>` token on a line, in order. Malformed tokens are skipped.
pub fn readings_in(line: &str) -> Vec<AppResult<ClockReading>> {
    let mut out = Vec::new();
    let mut rest = line;
    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) => {
                if let Some(r) = ClockReading::parse(&after[..close]) {
                    out.push(r);
                }
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    out
}
