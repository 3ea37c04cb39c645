use super::errors::PitError;
use super::models::StoredPit;
use crate::matches::models::now_timestamp;
use crate::transfer::{parse_rows, write_table, Columns, ParsedImport};

pub const PIT_COLUMNS: [&str; 4] = ["id", "created_at", "pit_json", "image_path"];

/// Writes pit entries in the order given. A missing image is an empty field.
pub fn export_pits(pits: &[StoredPit]) -> Result<String, PitError> {
    let rows = pits
        .iter()
        .map(|stored| {
            Ok(vec![
                stored.id.to_string(),
                stored.created_at.clone(),
                serde_json::to_string(&stored.pit)?,
                stored.image_path.clone().unwrap_or_default(),
            ])
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    Ok(write_table(&PIT_COLUMNS, rows)?)
}

/// Reads the rows of a pit export produced by [`export_pits`].
pub fn parse_pits(text: &str) -> Result<ParsedImport<StoredPit>, csv::Error> {
    parse_rows(text, stored_pit)
}

fn stored_pit(columns: &Columns<'_>, row: &csv::StringRecord) -> Result<StoredPit, String> {
    Ok(StoredPit {
        id: columns.id(row)?,
        created_at: columns
            .text(row, "created_at")
            .unwrap_or_else(now_timestamp),
        pit: columns.section(row, "pit_json")?,
        image_path: columns.text(row, "image_path"),
    })
}
