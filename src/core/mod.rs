//! Use-case orchestration: one `*Logic` type per CLI command.

pub mod export;
pub mod import;
pub mod input;
pub mod log;
pub mod matches;
pub mod show;
