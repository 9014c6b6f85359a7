//! Map, mode and session bounds.

use super::timestamp::{leading_reading, readings_in, resolve_clock, resolve_start_time};
use crate::errors::{AppError, AppResult};
use crate::models::{FragEvent, LogSession};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;

// Greedy groups: map runs to the last ", mission ", mode to the last " -".
static LEVEL_LOADED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^.* Loading level Levels/(?P<map>.*), mission (?P<mode>.*) -.*$")
        .expect("LEVEL_LOADED regex")
});

const PRECACHING_MARKER: &str = "Precaching level";
const PRECACHING_DONE: &str = "done";
const STATISTICS_MARKER: &str = "Statistics";

/// `(game_mode, map_name)` from the first "Loading level" line.
pub fn parse_mode_and_map(log_data: &str) -> AppResult<(String, String)> {
    let caps = LEVEL_LOADED.captures(log_data).ok_or_else(|| {
        AppError::MissingMetadata("no 'Loading level Levels/<map>, mission <mode>' line".into())
    })?;

    let map = caps["map"].trim().to_string();
    let mode = caps["mode"].trim().to_string();

    if map.is_empty() || mode.is_empty() {
        return Err(AppError::MissingMetadata(format!(
            "empty map or mode in '{}'",
            caps[0].trim()
        )));
    }

    Ok((mode, map))
}

/// Start of play: the last reading on the first "Precaching level ... done"
/// line. Logs without that line start at the engine start time.
pub fn parse_session_start(
    log_data: &str,
    log_start: DateTime<FixedOffset>,
) -> AppResult<DateTime<FixedOffset>> {
    let marker = log_data
        .lines()
        .find(|l| l.contains(PRECACHING_MARKER) && l.trim_end().ends_with(PRECACHING_DONE));

    let Some(line) = marker else {
        return Ok(log_start);
    };

    match readings_in(line).pop() {
        Some(reading) => Ok(resolve_clock(log_start, reading?)),
        None => Ok(log_start),
    }
}

/// End of play: the first "Statistics" line carrying a leading reading.
/// A crashed server never writes one, so the last frag stands in for it.
pub fn parse_session_end(
    log_data: &str,
    log_start: DateTime<FixedOffset>,
    frags: &[FragEvent],
) -> AppResult<Option<DateTime<FixedOffset>>> {
    for line in log_data.lines().filter(|l| l.contains(STATISTICS_MARKER)) {
        if let Some(reading) = leading_reading(line) {
            return Ok(Some(resolve_clock(log_start, reading?)));
        }
    }

    Ok(frags.last().map(|f| f.timestamp()))
}

/// Assemble the session record. `frags` are only consulted for the
/// end-of-session fallback.
pub fn parse_session(log_data: &str, frags: &[FragEvent]) -> AppResult<LogSession> {
    let (log_start, offset_hours) = resolve_start_time(log_data)?;
    let (mode, map) = parse_mode_and_map(log_data)?;

    let start = parse_session_start(log_data, log_start)?;
    let end = parse_session_end(log_data, log_start, frags)?.unwrap_or(start);

    // LogSession::new rolls an end that reads earlier than the start forward
    Ok(LogSession::new(start, end, offset_hours, mode, map))
}
