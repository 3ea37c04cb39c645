use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::errors::ImportError;
use super::types::{ImportKind, ImportSummary};
use crate::matches::export::parse_matches;
use crate::matches::repository::MatchRepository;
use crate::pits::export::parse_pits;
use crate::pits::repository::PitRepository;

/// Restores matches or pit entries from one of their CSV exports.
///
/// Rows are upserted by id, so importing the same file twice is harmless.
pub struct ImportService {
    match_repository: Arc<dyn MatchRepository>,
    pit_repository: Arc<dyn PitRepository>,
}

impl ImportService {
    pub fn new(
        match_repository: Arc<dyn MatchRepository>,
        pit_repository: Arc<dyn PitRepository>,
    ) -> Self {
        Self {
            match_repository,
            pit_repository,
        }
    }

    #[instrument(skip(self, text))]
    pub async fn import_csv(&self, text: &str) -> Result<ImportSummary, ImportError> {
        let kind = detect_kind(text)?;

        let (processed, errors) = match kind {
            ImportKind::Matches => {
                let parsed = parse_matches(text)?;
                let processed = parsed.rows.len();
                for stored in parsed.rows {
                    self.match_repository.upsert(stored).await?;
                }
                (processed, parsed.errors)
            }
            ImportKind::Pits => {
                let parsed = parse_pits(text)?;
                let processed = parsed.rows.len();
                for stored in parsed.rows {
                    self.pit_repository.upsert(stored).await?;
                }
                (processed, parsed.errors)
            }
        };

        if !errors.is_empty() {
            warn!(%kind, rejected = errors.len(), "Some CSV rows were rejected");
        }
        info!(%kind, processed, "CSV import finished");

        Ok(ImportSummary::new(processed, errors))
    }
}

/// Match exports carry `pre_match_json`, pit exports `pit_json`. A file with
/// no data rows is empty whatever its header says.
pub fn detect_kind(text: &str) -> Result<ImportKind, ImportError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    if reader.records().next().is_none() {
        return Err(ImportError::Empty);
    }

    let has = |column: &str| headers.iter().any(|header| header == column);
    if has("pre_match_json") {
        Ok(ImportKind::Matches)
    } else if has("pit_json") {
        Ok(ImportKind::Pits)
    } else {
        Err(ImportError::UnknownFormat)
    }
}
