use crate::db::pool::DbPool;
use crate::db::queries::list_matches;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub struct MatchesLogic;

impl MatchesLogic {
    pub fn print_matches(pool: &mut DbPool) -> AppResult<()> {
        let matches = list_matches(&pool.conn)?;

        if matches.is_empty() {
            info("No matches stored yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("START"),
            Column::new("END"),
            Column::new("MODE"),
            Column::new("MAP"),
            Column::new("FRAGS"),
        ]);

        for m in &matches {
            table.add_row(vec![
                m.match_id.to_string(),
                m.start_time.clone(),
                m.end_time.clone(),
                m.game_mode.clone(),
                m.map_name.clone(),
                m.frag_count.to_string(),
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }
}
