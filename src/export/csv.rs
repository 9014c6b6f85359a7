use crate::errors::{AppError, AppResult};
use crate::models::FragEvent;
use chrono::DateTime;
use csv::{ReaderBuilder, Writer, WriterBuilder};
use std::io::{Read, Write};
use std::path::Path;

fn frag_record(frag: &FragEvent) -> [String; 4] {
    [
        frag.timestamp_str(),
        frag.killer_name().to_string(),
        frag.victim_name().unwrap_or("").to_string(),
        frag.weapon_code().unwrap_or("").to_string(),
    ]
}

fn write_records<W: Write>(wtr: &mut Writer<W>, frags: &[FragEvent]) -> AppResult<()> {
    for frag in frags {
        wtr.write_record(frag_record(frag))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write frags as CSV rows: timestamp, killer, victim, weapon. No header row.
pub fn write_frags_csv(path: &Path, frags: &[FragEvent]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    write_records(&mut wtr, frags)
}

/// Same rows as [`write_frags_csv`], returned as a string.
pub fn frags_to_csv_string(frags: &[FragEvent]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    write_records(&mut wtr, frags)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// Read rows written by [`write_frags_csv`]. Empty victim/weapon cells are
/// suicides.
pub fn read_frags_csv(path: &Path) -> AppResult<Vec<FragEvent>> {
    let file = std::fs::File::open(path)?;
    read_frags(file)
}

pub fn read_frags<R: Read>(input: R) -> AppResult<Vec<FragEvent>> {
    let mut rdr = ReaderBuilder::new().has_headers(false).from_reader(input);
    let mut frags = Vec::new();

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() != 4 {
            return Err(AppError::Export(format!(
                "row {}: expected 4 columns, found {}",
                i + 1,
                record.len()
            )));
        }

        let ts = DateTime::parse_from_rfc3339(&record[0])
            .map_err(|e| AppError::Export(format!("row {}: bad timestamp: {e}", i + 1)))?;

        let frag = match (&record[2], &record[3]) {
            ("", "") => FragEvent::suicide(ts, &record[1]),
            (victim, weapon) if !victim.is_empty() && !weapon.is_empty() => {
                FragEvent::kill(ts, &record[1], victim, weapon)
            }
            _ => {
                return Err(AppError::Export(format!(
                    "row {}: victim and weapon must be both set or both empty",
                    i + 1
                )));
            }
        };
        frags.push(frag);
    }

    Ok(frags)
}
