//! Database row models for matches and frags.
//! Timestamps stay as the ISO 8601 text stored in SQLite.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StoredMatch {
    pub match_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub game_mode: String,
    pub map_name: String,
    pub frag_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredFrag {
    pub match_id: i64,
    pub frag_time: String,
    pub killer_name: String,
    pub victim_name: Option<String>, // NULL for suicides
    pub weapon_code: Option<String>, // NULL for suicides
}
