#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fraglog() -> Command {
    cargo_bin_cmd!("fraglog")
}

/// Path of a log under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_text(name: &str) -> String {
    fs::read_to_string(fixture(name)).expect("read fixture")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fraglog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fraglog_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Header + level lines shared by the inline test logs (start 12:22:07, UTC-5).
pub const HEADER: &str = "Log Started at Friday, November 09, 2018 12:22:07\n\
<22:07>  Lua cvar: (g_timezone,-5)\n\
<22:09> Loading level Levels/mp_surf, mission FFA - 1 of 3\n";

pub fn log_with_body(body: &str) -> String {
    format!("{HEADER}{body}")
}
