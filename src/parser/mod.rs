//! Log parsing pipeline: header → session metadata → frags.

pub mod frags;
pub mod session;
pub mod timestamp;

use crate::errors::AppResult;
use crate::models::ParsedLog;

pub use frags::{parse_frag_line, parse_frags};
pub use session::{parse_mode_and_map, parse_session};
pub use timestamp::{ClockReading, resolve_clock, resolve_start_time};

/// Parse a complete log. Pure: the same text always yields the same result.
pub fn parse_log(log_data: &str) -> AppResult<ParsedLog> {
    let (log_start, _) = resolve_start_time(log_data)?;
    let frags = parse_frags(log_data, log_start)?;
    let session = parse_session(log_data, &frags)?;
    Ok(ParsedLog { session, frags })
}
