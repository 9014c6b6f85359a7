//! Kill/suicide line tokenizer.
//!
//! Accepted shapes, with any source tag:
//!
//! ```text
//! <MM:SS> <Lua> Killer killed Victim with WeaponCode
//! <MM:SS> <Lua> Killer killed itself
//! ```
//!
//! Player names are free text, so a name containing " with " or " killed "
//! makes the line ambiguous. The split always uses the rightmost " with "
//! and then the rightmost " killed " before it. This is a heuristic, not a
//! grammar: `A killed B with C with Shotgun` yields victim `B with C`.

use super::timestamp::{ClockReading, resolve_clock};
use crate::errors::AppResult;
use crate::models::FragEvent;
use chrono::{DateTime, FixedOffset};

const KILLED: &str = " killed ";
const WITH: &str = " with ";
const SUICIDE_TAIL: &str = " killed itself";

/// A frag line split into its fields, before time resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrag<'a> {
    pub clock: &'a str,
    pub killer: &'a str,
    pub victim: Option<&'a str>,
    pub weapon: Option<&'a str>,
}

/// Split `<MM:SS> <tag> body`. Returns `(clock, body)`.
fn split_prefix(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('<')?;
    let (clock, rest) = rest.split_once("> <")?;
    if clock.len() != 5 || clock.as_bytes()[2] != b':' {
        return None;
    }
    let (_tag, body) = rest.split_once("> ")?;
    Some((clock, body))
}

/// Tokenize one log line. `None` means the line is not a frag line.
pub fn parse_frag_line(line: &str) -> Option<RawFrag<'_>> {
    let line = line.trim_end();
    let (clock, body) = split_prefix(line)?;

    if let Some(killer) = body.strip_suffix(SUICIDE_TAIL) {
        if killer.is_empty() {
            return None;
        }
        return Some(RawFrag {
            clock,
            killer,
            victim: None,
            weapon: None,
        });
    }

    let with_at = body.rfind(WITH)?;
    let weapon = &body[with_at + WITH.len()..];
    let head = &body[..with_at];

    let killed_at = head.rfind(KILLED)?;
    let killer = &head[..killed_at];
    let victim = &head[killed_at + KILLED.len()..];

    if killer.is_empty()
        || victim.is_empty()
        || weapon.is_empty()
        || weapon.contains(char::is_whitespace)
    {
        return None;
    }

    Some(RawFrag {
        clock,
        killer,
        victim: Some(victim),
        weapon: Some(weapon),
    })
}

/// All frags in log order, each resolved against `log_start` on its own.
pub fn parse_frags(log_data: &str, log_start: DateTime<FixedOffset>) -> AppResult<Vec<FragEvent>> {
    log_data
        .lines()
        .filter_map(parse_frag_line)
        .filter_map(|raw| ClockReading::parse(raw.clock).map(|r| (raw, r)))
        .map(|(raw, reading)| -> AppResult<FragEvent> {
            let ts = resolve_clock(log_start, reading?);
            Ok(match (raw.victim, raw.weapon) {
                (Some(victim), Some(weapon)) => FragEvent::kill(ts, raw.killer, victim, weapon),
                _ => FragEvent::suicide(ts, raw.killer),
            })
        })
        .collect()
}
