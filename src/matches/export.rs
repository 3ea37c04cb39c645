use super::errors::MatchError;
use super::models::{now_timestamp, StoredMatch};
use crate::scoring::MatchRecord;
use crate::transfer::{parse_rows, write_table, Columns, ParsedImport};

pub const MATCH_COLUMNS: [&str; 7] = [
    "id",
    "created_at",
    "pre_match_json",
    "auto_json",
    "teleop_json",
    "endgame_json",
    "misc_json",
];

/// Writes matches in the order given, JSON sections as compact strings.
pub fn export_matches(matches: &[StoredMatch]) -> Result<String, MatchError> {
    let rows = matches
        .iter()
        .map(|stored| {
            let record = &stored.record;
            Ok(vec![
                stored.id.to_string(),
                stored.created_at.clone(),
                serde_json::to_string(&record.pre_match)?,
                serde_json::to_string(&record.auto)?,
                serde_json::to_string(&record.teleop)?,
                serde_json::to_string(&record.endgame)?,
                serde_json::to_string(&record.misc)?,
            ])
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    Ok(write_table(&MATCH_COLUMNS, rows)?)
}

/// Reads the rows of a match export produced by [`export_matches`].
pub fn parse_matches(text: &str) -> Result<ParsedImport<StoredMatch>, csv::Error> {
    parse_rows(text, stored_match)
}

fn stored_match(columns: &Columns<'_>, row: &csv::StringRecord) -> Result<StoredMatch, String> {
    Ok(StoredMatch {
        id: columns.id(row)?,
        created_at: columns
            .text(row, "created_at")
            .unwrap_or_else(now_timestamp),
        record: MatchRecord {
            pre_match: columns.section(row, "pre_match_json")?,
            auto: columns.section(row, "auto_json")?,
            teleop: columns.section(row, "teleop_json")?,
            endgame: columns.section(row, "endgame_json")?,
            misc: columns.section(row, "misc_json")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::models::MatchId;
    use serde_json::json;

    fn stored(id: MatchId, team: u32) -> StoredMatch {
        StoredMatch {
            id,
            created_at: "2025-03-01 10:00:00".into(),
            record: serde_json::from_value(json!({
                "pre_match": {"team_number": team, "match_type": "Qual"},
                "auto": {"L4": {"Made": 2, "Missed": 1}},
                "endgame": {"final_status": "Deep"},
                "misc": {"comments": "drove \"fast\", tipped once"}
            }))
            .unwrap(),
        }
    }

    #[test]
    fn export_quotes_json_sections() {
        let csv = export_matches(&[stored(1, 4123)]).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("id,created_at,pre_match_json,auto_json,teleop_json,endgame_json,misc_json")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with(r#""1","2025-03-01 10:00:00","{""team_number"":4123"#));
        assert!(row.contains(r#""{}""#));
    }

    #[test]
    fn export_of_nothing_is_empty() {
        assert_eq!(export_matches(&[]).unwrap(), "");
    }

    #[test]
    fn export_reads_back() {
        let originals = vec![stored(1, 4123), stored(2, 254)];
        let csv = export_matches(&originals).unwrap();

        let parsed = parse_matches(&csv).unwrap();
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.rows, originals);
    }

    #[test]
    fn reports_bad_rows_and_keeps_the_rest() {
        let csv = "id,created_at,pre_match_json,auto_json,teleop_json,endgame_json,misc_json\n\
                   1,2025-03-01 10:00:00,\"{\"\"team_number\"\":1}\",,,,\n\
                   two,2025-03-01 10:00:00,{},{},{},{},{}\n\
                   3,,\"{broken\",{},{},{},{}\n\
                   4,2025-03-01 10:00:00,{},[1],{},{},{}\n\
                   9223372036854775807,,{},{},{},{},{}\n";

        let parsed = parse_matches(csv).unwrap();

        let ids: Vec<MatchId> = parsed.rows.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(parsed.errors.len(), 3);
        assert!(parsed.errors[0].starts_with("Row 2: invalid id"));
        assert!(parsed.errors[1].starts_with("Row 3: pre_match_json"));
        assert_eq!(parsed.errors[2], "Row 5: id 9223372036854775807 out of range");
        assert_eq!(parsed.rows[0].record.team_number(), Some("1".to_string()));
        assert!(parsed.rows[1].record.auto.is_empty());
    }

    #[test]
    fn empty_created_at_is_stamped_now() {
        let parsed = parse_matches("id,created_at,pre_match_json\n5,,{}\n").unwrap();
        assert!(!parsed.rows[0].created_at.is_empty());
    }
}
