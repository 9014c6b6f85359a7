use super::frag::{FragEvent, ISO_FORMAT};
use chrono::{DateTime, Duration, FixedOffset};
use serde::Serialize;

/// Metadata of one game-server run: when it started and ended, on which map
/// and in which mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogSession {
    start_instant: DateTime<FixedOffset>,
    end_instant: DateTime<FixedOffset>,
    utc_offset_hours: i32,
    game_mode: String,
    map_name: String,
}

impl LogSession {
    /// An end reading earlier than the start means the minute clock wrapped,
    /// so the end is moved one hour forward. Afterwards
    /// `end_instant >= start_instant` for any end within an hour of the start.
    pub fn new(
        start_instant: DateTime<FixedOffset>,
        end_instant: DateTime<FixedOffset>,
        utc_offset_hours: i32,
        game_mode: impl Into<String>,
        map_name: impl Into<String>,
    ) -> Self {
        let end_instant = if end_instant < start_instant {
            end_instant + Duration::hours(1)
        } else {
            end_instant
        };
        debug_assert!(end_instant >= start_instant, "session ends before it starts");

        Self {
            start_instant,
            end_instant,
            utc_offset_hours,
            game_mode: game_mode.into(),
            map_name: map_name.into(),
        }
    }

    pub fn start_instant(&self) -> DateTime<FixedOffset> {
        self.start_instant
    }

    pub fn end_instant(&self) -> DateTime<FixedOffset> {
        self.end_instant
    }

    pub fn utc_offset_hours(&self) -> i32 {
        self.utc_offset_hours
    }

    pub fn game_mode(&self) -> &str {
        &self.game_mode
    }

    pub fn map_name(&self) -> &str {
        &self.map_name
    }

    pub fn start_str(&self) -> String {
        self.start_instant.format(ISO_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_instant.format(ISO_FORMAT).to_string()
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_instant - self.start_instant).num_minutes()
    }
}

/// Everything extracted from one log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLog {
    pub session: LogSession,
    pub frags: Vec<FragEvent>,
}

impl ParsedLog {
    /// False when log order and timestamp order disagree, which happens when a
    /// session runs long enough for the minute clock to wrap twice.
    pub fn is_chronological(&self) -> bool {
        self.frags
            .windows(2)
            .all(|w| w[0].timestamp() <= w[1].timestamp())
    }

    pub fn kill_count(&self) -> usize {
        self.frags.iter().filter(|f| !f.is_suicide()).count()
    }

    pub fn suicide_count(&self) -> usize {
        self.frags.iter().filter(|f| f.is_suicide()).count()
    }
}
