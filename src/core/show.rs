use crate::config::Config;
use crate::core::input::read_log_file;
use crate::errors::AppResult;
use crate::models::ParsedLog;
use crate::parser::parse_log;
use crate::render::{Prettifier, TranscriptFormat};
use crate::ui::messages::{header, warning};
use std::path::Path;

pub struct ShowLogic;

impl ShowLogic {
    /// Parse `path` and print its transcript to stdout.
    pub fn show(
        path: &Path,
        cfg: &Config,
        format: Option<TranscriptFormat>,
        summary: bool,
    ) -> AppResult<()> {
        let log_data = read_log_file(path)?;
        let parsed = parse_log(&log_data)?;

        let format = format.unwrap_or(cfg.transcript_format);

        if summary {
            print_summary(&parsed, format);
        }
        warn_if_unordered(&parsed);

        let prettifier = Prettifier::new(cfg.icon_table());
        let out = prettifier.transcript(&parsed.frags, format)?;
        if !out.is_empty() {
            println!("{out}");
        }
        Ok(())
    }
}

fn summary_body(parsed: &ParsedLog) -> String {
    let s = &parsed.session;
    format!(
        "Start    : {}\nEnd      : {}\nDuration : {} min\nFrags    : {} ({} kills, {} suicides)\n",
        s.start_str(),
        s.end_str(),
        s.duration_minutes(),
        parsed.frags.len(),
        parsed.kill_count(),
        parsed.suicide_count()
    )
}

/// JSON output owns stdout, so the summary moves to stderr there.
fn print_summary(parsed: &ParsedLog, format: TranscriptFormat) {
    let title = format!(
        "{} ({})",
        parsed.session.map_name(),
        parsed.session.game_mode()
    );
    let body = summary_body(parsed);

    match format {
        TranscriptFormat::Text => {
            header(title);
            println!("{body}");
        }
        TranscriptFormat::Json => eprintln!("=== {title} ===\n{body}"),
    }
}

/// Log order disagrees with the resolved times only when the session ran
/// past a second hour boundary, which the minute clock cannot express.
pub(crate) fn warn_if_unordered(parsed: &ParsedLog) {
    if !parsed.is_chronological() {
        warning("Frag times are not monotonic: session longer than the single-hour rollover can resolve.");
    }
}
