pub mod config;
pub mod csv;
pub mod db;
pub mod import;
pub mod init;
pub mod log;
pub mod matches;
pub mod show;
