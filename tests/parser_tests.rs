mod common;
use common::{fixture_text, log_with_body};

use chrono::{DateTime, Timelike};
use fraglog::errors::AppError;
use fraglog::models::{FragEvent, LogSession};
use fraglog::parser::frags::parse_frag_line;
use fraglog::parser::session::{parse_session_end, parse_session_start};
use fraglog::parser::timestamp::{
    HEADER_FORMAT, parse_local_start, parse_utc_offset, readings_in,
};
use fraglog::parser::{
    ClockReading, parse_frags, parse_log, parse_mode_and_map, resolve_clock, resolve_start_time,
};

fn ts(s: &str) -> chrono::DateTime<chrono::FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid rfc3339")
}

// ---------------------------------------------------------------------------
// Timestamp resolver
// ---------------------------------------------------------------------------

#[test]
fn test_resolve_start_time_with_negative_offset() {
    let log = log_with_body("");
    let (start, hours) = resolve_start_time(&log).unwrap();

    assert_eq!(hours, -5);
    assert_eq!(start, ts("2018-11-09T12:22:07-05:00"));
}

#[test]
fn test_start_time_reformats_to_header() {
    let log = log_with_body("");
    let (start, hours) = resolve_start_time(&log).unwrap();

    assert_eq!(
        start.format(HEADER_FORMAT).to_string(),
        "Friday, November 09, 2018 12:22:07"
    );
    assert_eq!(start.offset().local_minus_utc(), hours * 3600);
}

#[test]
fn test_utc_offset_dialects() {
    assert_eq!(parse_utc_offset("x (g_timezone,-5)\n").unwrap(), -5);
    assert_eq!(parse_utc_offset("g_timezone=-5").unwrap(), -5);
    assert_eq!(parse_utc_offset("(g_timezone,+7)").unwrap(), 7);
    assert_eq!(parse_utc_offset("(g_timezone,10)\r\n").unwrap(), 10);
    assert_eq!(parse_utc_offset("(g_timezone,0)").unwrap(), 0);
}

#[test]
fn test_utc_offset_missing_or_garbage() {
    assert!(matches!(
        parse_utc_offset("no cvar here"),
        Err(AppError::MalformedHeader(_))
    ));
    assert!(matches!(
        parse_utc_offset("(g_timezone,abc)"),
        Err(AppError::MalformedHeader(_))
    ));
    assert!(matches!(
        parse_utc_offset("(g_timezone,-)"),
        Err(AppError::MalformedHeader(_))
    ));
    assert!(matches!(
        parse_utc_offset("(g_timezone,99)"),
        Err(AppError::MalformedHeader(_))
    ));
}

#[test]
fn test_local_start_accepts_bare_calendar_line() {
    let t = parse_local_start("Friday, November 09, 2018 12:22:07\nrest").unwrap();
    assert_eq!(t.to_string(), "2018-11-09 12:22:07");
}

#[test]
fn test_local_start_rejects_other_first_line() {
    let err = parse_local_start("FileVersion: 1,4,0\n").unwrap_err();
    match err {
        AppError::MalformedHeader(msg) => assert!(msg.contains("FileVersion")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_clock_reading_parse() {
    assert_eq!(
        ClockReading::parse("05:30").unwrap().unwrap(),
        ClockReading {
            minute: 5,
            second: 30
        }
    );
    assert!(ClockReading::parse("5:30").is_none());
    assert!(ClockReading::parse("ab:cd").is_none());
    assert!(ClockReading::parse("Lua").is_none());
    assert!(matches!(
        ClockReading::parse("75:10"),
        Some(Err(AppError::InvalidClockReading(_)))
    ));
}

#[test]
fn test_rollover_applies_only_below_start_minute() {
    let start = ts("2018-11-09T12:22:07-05:00");

    for minute in 0..60 {
        let reading = ClockReading::new(minute, 30).unwrap();
        let resolved = resolve_clock(start, reading);

        assert_eq!(resolved.minute(), minute);
        assert_eq!(resolved.second(), 30);
        if minute >= 22 {
            assert_eq!(resolved.hour(), 12, "minute {minute} must not roll over");
        } else {
            assert_eq!(resolved.hour(), 13, "minute {minute} must roll over once");
        }
    }
}

#[test]
fn test_rollover_same_minute_earlier_second() {
    let start = ts("2018-11-09T12:22:07-05:00");
    let resolved = resolve_clock(start, ClockReading::new(22, 3).unwrap());
    assert_eq!(resolved, ts("2018-11-09T13:22:03-05:00"));
}

#[test]
fn test_rollover_crosses_midnight() {
    let start = ts("2018-11-10T23:40:00+07:00");
    let resolved = resolve_clock(start, ClockReading::new(5, 30).unwrap());
    assert_eq!(resolved, ts("2018-11-11T00:05:30+07:00"));
}

#[test]
fn test_readings_in_line() {
    let found: Vec<_> = readings_in("<22:12> Precaching level ... <22:45> done")
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(
        found,
        vec![ClockReading::new(22, 12).unwrap(), ClockReading::new(22, 45).unwrap()]
    );
}

// ---------------------------------------------------------------------------
// Frag tokenizer
// ---------------------------------------------------------------------------

#[test]
fn test_kill_line_fields() {
    let raw = parse_frag_line("<05:30> <Lua> Alice killed Bob with Shotgun").unwrap();
    assert_eq!(raw.clock, "05:30");
    assert_eq!(raw.killer, "Alice");
    assert_eq!(raw.victim, Some("Bob"));
    assert_eq!(raw.weapon, Some("Shotgun"));
}

#[test]
fn test_suicide_line_fields() {
    let raw = parse_frag_line("<23:10> <Lua> Carl killed itself\r").unwrap();
    assert_eq!(raw.killer, "Carl");
    assert_eq!(raw.victim, None);
    assert_eq!(raw.weapon, None);
}

#[test]
fn test_names_with_spaces_and_other_tags() {
    let raw = parse_frag_line("<01:02> <Server> Big Bob killed Little Joe with M4").unwrap();
    assert_eq!(raw.killer, "Big Bob");
    assert_eq!(raw.victim, Some("Little Joe"));
    assert_eq!(raw.weapon, Some("M4"));
}

#[test]
fn test_ambiguous_names_split_at_rightmost_markers() {
    let raw = parse_frag_line("<01:02> <Lua> Ann killed Bo with Cy with Rocket").unwrap();
    assert_eq!(raw.killer, "Ann");
    assert_eq!(raw.victim, Some("Bo with Cy"));
    assert_eq!(raw.weapon, Some("Rocket"));

    let raw = parse_frag_line("<01:02> <Lua> Ann killed Mr killed Bo with Rocket").unwrap();
    assert_eq!(raw.killer, "Ann killed Mr");
    assert_eq!(raw.victim, Some("Bo"));
}

#[test]
fn test_non_frag_lines_are_ignored() {
    for line in [
        "",
        "Log Started at Friday, November 09, 2018 12:22:07",
        "<22:07>  Lua cvar: (g_timezone,-5)",
        "<22:12> Precaching level ... <22:45> done",
        "<10:02> ==== Statistics =====",
        "<05:30> <Lua> Alice killed Bob",
        "<05:30> <Lua> Alice killed Bob with ",
        "<05:30> <Lua> Alice killed Bob with two guns",
        "<05:30> <Lua>  killed itself",
        "05:30 <Lua> Alice killed Bob with Shotgun",
        "<5:30> <Lua> Alice killed Bob with Shotgun",
    ] {
        assert!(parse_frag_line(line).is_none(), "unexpected frag from {line:?}");
    }
}

#[test]
fn test_every_frag_line_yields_one_event() {
    let body = "\
<30:01> <Lua> Alice killed Bob with Shotgun
<30:02> some chatter about nothing
<41:12> <Lua> Carl killed itself
<41:13> <Lua> Alice killed Bob
<55:40> <Lua> Bob killed Alice with HandGrenade
";
    let log = log_with_body(body);
    let (start, _) = resolve_start_time(&log).unwrap();
    let frags = parse_frags(&log, start).unwrap();

    assert_eq!(frags.len(), 3);
    assert_eq!(frags[0].killer_name(), "Alice");
    assert!(frags[1].is_suicide());
    assert_eq!(frags[2].weapon_code(), Some("HandGrenade"));
}

#[test]
fn test_out_of_range_frag_clock_is_an_error() {
    let log = log_with_body("<75:01> <Lua> Alice killed Bob with Shotgun\n");
    let (start, _) = resolve_start_time(&log).unwrap();
    assert!(matches!(
        parse_frags(&log, start),
        Err(AppError::InvalidClockReading(_))
    ));
}

// ---------------------------------------------------------------------------
// Session metadata
// ---------------------------------------------------------------------------

#[test]
fn test_mode_and_map_first_match() {
    let log = "\
<00:01> Loading level Levels/mp_surf, mission FFA - 1 of 3
<30:00> Loading level Levels/mp_other, mission TDM - 2 of 3
";
    let (mode, map) = parse_mode_and_map(log).unwrap();
    assert_eq!(mode, "FFA");
    assert_eq!(map, "mp_surf");
}

#[test]
fn test_mode_and_map_missing() {
    assert!(matches!(
        parse_mode_and_map("<00:01> nothing loaded"),
        Err(AppError::MissingMetadata(_))
    ));
}

#[test]
fn test_session_start_both_precaching_dialects() {
    let start = ts("2018-11-09T12:22:07-05:00");

    let inner = parse_session_start("<22:12> Precaching level ... <22:45> done\n", start).unwrap();
    assert_eq!(inner, ts("2018-11-09T12:22:45-05:00"));

    let leading = parse_session_start("<23:30>  Precaching level ... done\n", start).unwrap();
    assert_eq!(leading, ts("2018-11-09T12:23:30-05:00"));

    let missing = parse_session_start("<23:30> something else\n", start).unwrap();
    assert_eq!(missing, start);
}

#[test]
fn test_session_end_uses_first_statistics_marker() {
    let start = ts("2018-11-09T12:22:07-05:00");
    let log = "\
<10:02> ==== Statistics =====
<11:00> ==== Statistics =====
";
    let end = parse_session_end(log, start, &[]).unwrap();
    assert_eq!(end, Some(ts("2018-11-09T13:10:02-05:00")));
}

#[test]
fn test_session_end_falls_back_to_last_frag() {
    let start = ts("2018-11-09T12:22:07-05:00");
    let frags = vec![
        FragEvent::suicide(ts("2018-11-09T12:41:12-05:00"), "Carl"),
        FragEvent::kill(ts("2018-11-09T13:05:30-05:00"), "Alice", "Bob", "Shotgun"),
    ];
    let end = parse_session_end("no marker", start, &frags).unwrap();
    assert_eq!(end, Some(ts("2018-11-09T13:05:30-05:00")));
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

#[test]
fn test_kill_line_resolves_after_start() {
    let log = log_with_body("<05:30> <Lua> Alice killed Bob with Shotgun\n");
    let parsed = parse_log(&log).unwrap();

    assert_eq!(
        parsed.frags,
        vec![FragEvent::kill(
            ts("2018-11-09T13:05:30-05:00"),
            "Alice",
            "Bob",
            "Shotgun"
        )]
    );
}

#[test]
fn test_suicide_line_resolves_after_start() {
    let log = log_with_body("<23:10> <Lua> Carl killed itself\n");
    let parsed = parse_log(&log).unwrap();

    assert_eq!(
        parsed.frags,
        vec![FragEvent::suicide(ts("2018-11-09T12:23:10-05:00"), "Carl")]
    );
}

#[test]
fn test_no_statistics_end_is_last_frag() {
    let log = log_with_body(
        "<30:01> <Lua> Alice killed Bob with Shotgun\n<05:30> <Lua> Alice killed Bob with Shotgun\n",
    );
    let parsed = parse_log(&log).unwrap();
    assert_eq!(
        parsed.session.end_instant(),
        ts("2018-11-09T13:05:30-05:00")
    );
}

#[test]
fn test_no_statistics_no_frags_end_equals_start() {
    let parsed = parse_log(&log_with_body("")).unwrap();
    assert_eq!(parsed.session.end_instant(), parsed.session.start_instant());
    assert!(parsed.frags.is_empty());
}

#[test]
fn test_statistics_before_precaching_rolls_end_forward() {
    // Statistics at :22:30 is after the header (12:22:07) but before play
    // started at 12:22:45, so it belongs to the next hour.
    let log = log_with_body(
        "<22:12> Precaching level ... <22:45> done\n<22:30> ==== Statistics =====\n",
    );
    let parsed = parse_log(&log).unwrap();

    assert_eq!(
        parsed.session.start_instant(),
        ts("2018-11-09T12:22:45-05:00")
    );
    assert_eq!(
        parsed.session.end_instant(),
        ts("2018-11-09T13:22:30-05:00")
    );
}

#[test]
fn test_log_session_new_rolls_inverted_end_forward() {
    let session = LogSession::new(
        ts("2018-11-09T12:22:45-05:00"),
        ts("2018-11-09T12:10:00-05:00"),
        -5,
        "FFA",
        "mp_surf",
    );

    assert_eq!(session.end_instant(), ts("2018-11-09T13:10:00-05:00"));
    assert!(session.end_instant() >= session.start_instant());
    assert_eq!(session.duration_minutes(), 47);
}

#[test]
fn test_fixture_with_statistics() {
    let parsed = parse_log(&fixture_text("log_statistics.txt")).unwrap();
    let s = &parsed.session;

    assert_eq!(s.game_mode(), "FFA");
    assert_eq!(s.map_name(), "mp_surf");
    assert_eq!(s.utc_offset_hours(), -5);
    assert_eq!(s.start_instant(), ts("2018-11-09T12:22:45-05:00"));
    assert_eq!(s.end_instant(), ts("2018-11-09T13:10:02-05:00"));

    assert_eq!(parsed.frags.len(), 6);
    assert_eq!(parsed.kill_count(), 5);
    assert_eq!(parsed.suicide_count(), 1);
    assert!(parsed.is_chronological());
    assert_eq!(parsed.frags[4].weapon_code(), Some("MG"));
}

#[test]
fn test_fixture_crash_crosses_midnight() {
    let parsed = parse_log(&fixture_text("log_crash.txt")).unwrap();
    let s = &parsed.session;

    assert_eq!(s.game_mode(), "ASSAULT");
    assert_eq!(s.map_name(), "mp_jungle");
    assert_eq!(s.utc_offset_hours(), 7);
    assert_eq!(s.start_instant(), ts("2018-11-10T23:40:30+07:00"));
    assert_eq!(s.end_instant(), ts("2018-11-11T00:05:30+07:00"));
    assert!(s.end_instant() >= s.start_instant());
    assert!(parsed.is_chronological());
}

#[test]
fn test_fixture_without_timezone_is_malformed() {
    assert!(matches!(
        parse_log(&fixture_text("log_no_timezone.txt")),
        Err(AppError::MalformedHeader(_))
    ));
}

#[test]
fn test_long_session_is_reported_unordered() {
    // really 12:30, 13:05, 13:10, 13:25; the last one resolves to 12:25
    let log = log_with_body(
        "\
<30:00> <Lua> A killed B with M4
<05:00> <Lua> A killed B with M4
<10:00> <Lua> A killed B with M4
<25:00> <Lua> A killed B with M4
",
    );
    let parsed = parse_log(&log).unwrap();
    assert_eq!(parsed.frags.len(), 4);
    assert!(!parsed.is_chronological());
}

#[test]
fn test_parsing_is_idempotent() {
    let text = fixture_text("log_statistics.txt");
    assert_eq!(parse_log(&text).unwrap(), parse_log(&text).unwrap());
}
