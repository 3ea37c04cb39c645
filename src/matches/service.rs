use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::errors::MatchError;
use super::export::export_matches;
use super::models::{MatchId, MatchUpdate, StoredMatch};
use super::repository::MatchRepository;
use super::types::{RankingParams, ScoredMatch, SubmitResponse};
use crate::rankings::{build_leaderboard, Leaderboard, RankingQuery};
use crate::scoring::{MatchRecord, MatchScore, RubricSource};
use crate::teams::{is_team, TeamAverages};

/// Most rows a single list request may return.
pub const MAX_PAGE_SIZE: usize = 200;

/// Service for scoring, storing and aggregating scouted matches.
///
/// The rubric is reloaded for every operation that scores.
pub struct MatchService {
    repository: Arc<dyn MatchRepository>,
    rubric_source: Arc<dyn RubricSource>,
}

impl MatchService {
    pub fn new(
        repository: Arc<dyn MatchRepository>,
        rubric_source: Arc<dyn RubricSource>,
    ) -> Self {
        Self {
            repository,
            rubric_source,
        }
    }

    pub async fn raw_config(&self) -> Result<Value, MatchError> {
        Ok(self.rubric_source.load_raw().await?)
    }

    #[instrument(skip(self, record))]
    pub async fn submit(&self, record: MatchRecord) -> Result<SubmitResponse, MatchError> {
        let rubric = self.rubric_source.load().await?;
        let score = MatchScore::for_record(&record, &rubric);
        let stored = self.repository.insert(record).await?;

        info!(
            match_id = stored.id,
            team = ?stored.record.team_number(),
            total = score.total(),
            "Match scored"
        );

        Ok(SubmitResponse::new(stored.id, score))
    }

    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<StoredMatch>, MatchError> {
        let limit = match limit {
            Some(limit) => limit.clamp(0, MAX_PAGE_SIZE as i64) as usize,
            None => self.rubric_source.load().await?.raw_table_cap.min(MAX_PAGE_SIZE),
        };
        let offset = offset.unwrap_or_default().max(0) as usize;

        self.repository.list(limit, offset).await
    }

    #[instrument(skip(self, update))]
    pub async fn update(
        &self,
        id: MatchId,
        update: MatchUpdate,
    ) -> Result<StoredMatch, MatchError> {
        self.repository
            .update(id, update)
            .await?
            .ok_or(MatchError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: MatchId) -> Result<(), MatchError> {
        self.repository.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn team_matches(&self, team: &str) -> Result<Vec<ScoredMatch>, MatchError> {
        let rubric = self.rubric_source.load().await?;
        let matches = self
            .repository
            .all()
            .await?
            .into_iter()
            .filter(|stored| is_team(&stored.record, team))
            .map(|stored| {
                let score = MatchScore::for_record(&stored.record, &rubric);
                ScoredMatch::new(stored, score)
            })
            .collect::<Vec<_>>();

        debug!(team, matches = matches.len(), "Team matches scored");
        Ok(matches)
    }

    #[instrument(skip(self))]
    pub async fn team_averages(&self, team: &str) -> Result<TeamAverages, MatchError> {
        let rubric = self.rubric_source.load().await?;
        let matches = self.repository.all().await?;

        Ok(TeamAverages::from_records(
            team,
            matches
                .iter()
                .map(|stored| &stored.record)
                .filter(|record| is_team(record, team)),
            &rubric,
        ))
    }

    #[instrument(skip(self))]
    pub async fn rankings(&self, params: RankingParams) -> Result<Leaderboard, MatchError> {
        let rubric = self.rubric_source.load().await?;

        let option = match params.option.as_deref() {
            Some(name) => rubric.ranking_option(name),
            None => rubric.default_ranking_option(),
        }
        .cloned()
        .ok_or_else(|| {
            MatchError::UnknownRankingOption(params.option.clone().unwrap_or_default())
        })?;

        let query = RankingQuery {
            min_matches: params.min_matches.unwrap_or_default(),
            team: params.team.filter(|team| !team.is_empty()),
        };

        let records = self
            .repository
            .all()
            .await?
            .into_iter()
            .map(|stored| stored.record)
            .collect();

        Ok(build_leaderboard(&option, records, &rubric, &query))
    }

    pub async fn export_csv(&self) -> Result<String, MatchError> {
        let matches = self.repository.all().await?;
        export_matches(&matches)
    }
}
