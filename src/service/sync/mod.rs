//! Sync orchestration across entity kinds.
//!
//! [`SyncService`] sequences the per-kind reconcilers in dependency order
//! (teams before standings and rosters, rosters before player statistics),
//! honors the refresh tracker so fresh data is not re-fetched, and contains
//! every failure: the public operations return booleans and the full refresh
//! returns a per-kind outcome report rather than raising.

pub mod cache;
pub mod game;
pub mod roster;
pub mod standings;
pub mod team;

use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing::{debug, error, warn};

use crate::data::refresh::{RefreshKind, RefreshRepository};
use crate::error::Error;
use crate::service::rate_limit::RateLimiter;
use crate::service::sync::{
    game::GameSync, roster::RosterSync, standings::StandingsSync, team::TeamSync,
};

pub use cache::SyncCache;

/// Per-kind outcome of one full refresh. Kinds that were skipped because
/// their data was still fresh count as successes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyncReport {
    pub teams: bool,
    pub standings: bool,
    pub games: bool,
    pub rosters: bool,
    /// Teams whose roster pass failed (empty when `rosters` is true or the
    /// roster loop was skipped as fresh).
    pub failed_team_ids: Vec<i64>,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.teams && self.standings && self.games && self.rosters
    }
}

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    provider: &'a crate::provider::Client,
    limiter: Arc<RateLimiter>,
    season: String,
}

impl<'a> SyncService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        provider: &'a crate::provider::Client,
        season: &str,
    ) -> Self {
        Self::with_rate_limiter(db, provider, season, Arc::new(RateLimiter::default()))
    }

    pub fn with_rate_limiter(
        db: &'a DatabaseConnection,
        provider: &'a crate::provider::Client,
        season: &str,
        limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            db,
            provider,
            limiter,
            season: season.to_string(),
        }
    }

    /// Syncs the team directory. Returns true on success or when the data is
    /// still fresh.
    pub async fn sync_teams(&self) -> bool {
        self.report_outcome(RefreshKind::Teams, self.run_teams().await)
    }

    /// Syncs league standings into team statistics. Skipped (as failure)
    /// until the team directory has synced at least once.
    pub async fn sync_standings(&self) -> bool {
        self.report_outcome(RefreshKind::Standings, self.run_standings().await)
    }

    /// Syncs the scoreboard for one date.
    pub async fn sync_games(&self, date: NaiveDate) -> bool {
        self.report_outcome(RefreshKind::Games, self.run_games(date).await)
    }

    /// Syncs one team's roster, player statistics, and team dashboard.
    /// Skipped (as failure) until the team directory has synced at least
    /// once, or when the team is not persisted locally.
    pub async fn sync_roster_and_stats(&self, team_id: i64) -> bool {
        self.report_outcome(RefreshKind::Rosters, self.run_roster(team_id).await)
    }

    /// Refreshes every kind in dependency order, looping the roster pass
    /// over all persisted teams. Failure of one kind never blocks
    /// independent kinds; pacing between teams comes from the shared rate
    /// limiter. Never raises — outcomes are aggregated into the report.
    pub async fn full_refresh(&self, date: NaiveDate) -> SyncReport {
        let mut report = SyncReport::default();

        report.teams = self.sync_teams().await;
        report.standings = self.sync_standings().await;
        report.games = self.sync_games(date).await;

        report.rosters = match self.run_roster_fleet().await {
            Ok(Some(failed_team_ids)) => {
                report.failed_team_ids = failed_team_ids;
                report.failed_team_ids.is_empty()
            }
            Ok(None) => false,
            Err(e) => {
                error!("Roster fleet refresh failed: {:?}", e);
                false
            }
        };

        report
    }

    fn report_outcome(&self, kind: RefreshKind, result: Result<bool, Error>) -> bool {
        match result {
            Ok(true) => true,
            Ok(false) => false,
            Err(e) => {
                error!("Sync of {} failed: {:?}", kind, e);
                false
            }
        }
    }

    async fn run_teams(&self) -> Result<bool, Error> {
        let refresh_repo = RefreshRepository::new(self.db);
        let kind = RefreshKind::Teams;

        if !refresh_repo.should_refresh(kind, kind.max_age()).await? {
            debug!("Team data is fresh, skipping refresh");
            return Ok(true);
        }

        TeamSync::new(self.db, self.provider, self.limiter.clone())
            .run()
            .await?;

        refresh_repo.mark_refreshed(kind).await?;
        Ok(true)
    }

    async fn run_standings(&self) -> Result<bool, Error> {
        let refresh_repo = RefreshRepository::new(self.db);
        let kind = RefreshKind::Standings;

        if !refresh_repo.has_completed(RefreshKind::Teams).await? {
            warn!("Skipping standings sync: teams have never synced");
            return Ok(false);
        }

        if !refresh_repo.should_refresh(kind, kind.max_age()).await? {
            debug!("Standings data is fresh, skipping refresh");
            return Ok(true);
        }

        let mut cache = SyncCache::default();
        StandingsSync::new(self.db, self.provider, self.limiter.clone(), &self.season)
            .run(&mut cache)
            .await?;

        refresh_repo.mark_refreshed(kind).await?;
        Ok(true)
    }

    async fn run_games(&self, date: NaiveDate) -> Result<bool, Error> {
        let refresh_repo = RefreshRepository::new(self.db);
        let kind = RefreshKind::Games;

        if !refresh_repo.should_refresh(kind, kind.max_age()).await? {
            debug!("Game data is fresh, skipping refresh");
            return Ok(true);
        }

        let mut cache = SyncCache::default();
        GameSync::new(self.db, self.provider, self.limiter.clone())
            .run(date, &mut cache)
            .await?;

        refresh_repo.mark_refreshed(kind).await?;
        Ok(true)
    }

    async fn run_roster(&self, team_id: i64) -> Result<bool, Error> {
        let refresh_repo = RefreshRepository::new(self.db);

        if !refresh_repo.has_completed(RefreshKind::Teams).await? {
            warn!(
                "Skipping roster sync for team {}: teams have never synced",
                team_id
            );
            return Ok(false);
        }

        let mut cache = SyncCache::default();
        cache.ensure_loaded(self.db).await?;

        let Some(abbreviation) = cache.team_abbreviation(team_id).map(str::to_string) else {
            warn!("Skipping roster sync for unknown team ID {}", team_id);
            return Ok(false);
        };

        RosterSync::new(self.db, self.provider, self.limiter.clone(), &self.season)
            .run(team_id, &abbreviation)
            .await?;

        Ok(true)
    }

    /// Roster pass over every persisted team. The `rosters` tracker is only
    /// marked once the whole fleet succeeds, so a partial run stays due.
    /// Returns the IDs of teams whose pass failed, or None when the teams
    /// kind has never synced.
    async fn run_roster_fleet(&self) -> Result<Option<Vec<i64>>, Error> {
        let refresh_repo = RefreshRepository::new(self.db);
        let kind = RefreshKind::Rosters;

        if !refresh_repo.has_completed(RefreshKind::Teams).await? {
            warn!("Skipping roster fleet refresh: teams have never synced");
            return Ok(None);
        }

        if !refresh_repo.should_refresh(kind, kind.max_age()).await? {
            debug!("Roster data is fresh, skipping refresh");
            return Ok(Some(Vec::new()));
        }

        let mut cache = SyncCache::default();
        cache.ensure_loaded(self.db).await?;

        let team_ids: Vec<i64> = cache.team_ids().collect();
        let mut failed_team_ids = Vec::new();

        for team_id in team_ids {
            // Abbreviation is present for every cached team
            let Some(abbreviation) = cache.team_abbreviation(team_id).map(str::to_string) else {
                failed_team_ids.push(team_id);
                continue;
            };

            let sync =
                RosterSync::new(self.db, self.provider, self.limiter.clone(), &self.season);
            if let Err(e) = sync.run(team_id, &abbreviation).await {
                error!("Roster sync for team {} failed: {:?}", team_id, e);
                failed_team_ids.push(team_id);
            }
        }

        if failed_team_ids.is_empty() {
            refresh_repo.mark_refreshed(kind).await?;
        }

        Ok(Some(failed_team_ids))
    }
}
