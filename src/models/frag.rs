use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// ISO 8601 layout used by transcripts, CSV rows and the database.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// A single kill or suicide recorded in a session log.
///
/// Victim and weapon are either both present (kill) or both absent
/// (suicide); the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragEvent {
    timestamp: DateTime<FixedOffset>,
    killer_name: String,
    victim_name: Option<String>,
    weapon_code: Option<String>,
}

impl FragEvent {
    pub fn kill(
        timestamp: DateTime<FixedOffset>,
        killer: impl Into<String>,
        victim: impl Into<String>,
        weapon: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            killer_name: killer.into(),
            victim_name: Some(victim.into()),
            weapon_code: Some(weapon.into()),
        }
    }

    pub fn suicide(timestamp: DateTime<FixedOffset>, killer: impl Into<String>) -> Self {
        Self {
            timestamp,
            killer_name: killer.into(),
            victim_name: None,
            weapon_code: None,
        }
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn killer_name(&self) -> &str {
        &self.killer_name
    }

    pub fn victim_name(&self) -> Option<&str> {
        self.victim_name.as_deref()
    }

    pub fn weapon_code(&self) -> Option<&str> {
        self.weapon_code.as_deref()
    }

    pub fn is_suicide(&self) -> bool {
        self.victim_name.is_none()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(ISO_FORMAT).to_string()
    }
}
