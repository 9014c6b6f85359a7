use crate::db::pool::DbPool;
use crate::db::queries::{count_frags, count_matches};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let matches = count_matches(&pool.conn)?;
    let frags = count_frags(&pool.conn)?;
    println!("{}• Matches:{} {}{}{}", CYAN, RESET, GREEN, matches, RESET);
    println!("{}• Frags:{} {}{}{}", CYAN, RESET, GREEN, frags, RESET);

    //
    // 3) TIME RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            r#"SELECT start_time FROM "match" ORDER BY start_time ASC LIMIT 1"#,
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            r#"SELECT end_time FROM "match" ORDER BY end_time DESC LIMIT 1"#,
            [],
            |row| row.get(0),
        )
        .optional()?;

    let dash = format!("{GREY}--{RESET}");
    println!("{}• Played:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| dash.clone()));
    println!("    to:   {}", last.unwrap_or(dash));

    //
    // 4) AVERAGE FRAGS/MATCH
    //
    if matches > 0 {
        let avg = frags as f64 / matches as f64;
        println!("{}• Average frags/match:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
