use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::errors::PitError;
use super::export::export_pits;
use super::models::{PitId, PitUpdate, StoredPit};
use super::repository::PitRepository;
use super::types::{PitCreated, PitSubmission};
use crate::matches::service::MAX_PAGE_SIZE;
use crate::scoring::RubricSource;

/// Service for pit scouting entries.
pub struct PitService {
    repository: Arc<dyn PitRepository>,
    rubric_source: Arc<dyn RubricSource>,
}

impl PitService {
    pub fn new(repository: Arc<dyn PitRepository>, rubric_source: Arc<dyn RubricSource>) -> Self {
        Self {
            repository,
            rubric_source,
        }
    }

    #[instrument(skip(self, submission))]
    pub async fn create(&self, submission: PitSubmission) -> Result<PitCreated, PitError> {
        let stored = self
            .repository
            .insert(submission.pit_json, submission.image_path)
            .await?;

        info!(pit_id = stored.id, "Pit entry created");
        Ok(PitCreated { id: stored.id })
    }

    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<StoredPit>, PitError> {
        let limit = match limit {
            Some(limit) => limit.clamp(0, MAX_PAGE_SIZE as i64) as usize,
            None => self.rubric_source.load().await?.raw_table_cap.min(MAX_PAGE_SIZE),
        };
        let offset = offset.unwrap_or_default().max(0) as usize;

        self.repository.list(limit, offset).await
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, id: PitId, update: PitUpdate) -> Result<StoredPit, PitError> {
        self.repository
            .update(id, update)
            .await?
            .ok_or(PitError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: PitId) -> Result<(), PitError> {
        self.repository.delete(id).await
    }

    /// Latest pit entry whose `team_number` is the text `team`. When there is
    /// none and `team` is all digits, the latest entry scouted as that number.
    #[instrument(skip(self))]
    pub async fn team_pit(&self, team: &str) -> Result<StoredPit, PitError> {
        let pits = self.repository.all().await?;

        let by_text = pits.iter().rev().find(|pit| pit.has_team_text(team));
        let found = by_text.or_else(|| {
            let number = digits_only(team)?;
            debug!(team, "No pit entry under the team text, trying the number");
            pits.iter().rev().find(|pit| pit.has_team_number(number))
        });

        found
            .cloned()
            .ok_or_else(|| PitError::NoPitForTeam(team.to_string()))
    }

    pub async fn export_csv(&self) -> Result<String, PitError> {
        let pits = self.repository.all().await?;
        export_pits(&pits)
    }
}

fn digits_only(team: &str) -> Option<i64> {
    if team.is_empty() || !team.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    team.parse().ok()
}
