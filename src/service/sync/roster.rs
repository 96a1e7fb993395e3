use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};

use crate::data::{
    player::PlayerRepository, player_stats::PlayerStatsRepository, team_stats::TeamStatsRepository,
};
use crate::error::Error;
use crate::service::rate_limit::RateLimiter;
use crate::service::retry::RetryContext;
use crate::util::stats::{season_averages, SeasonAverages};

/// Reconciles one team's roster, its players' season averages, and the
/// team's per-game dashboard fields.
pub struct RosterSync<'a> {
    db: &'a DatabaseConnection,
    provider: &'a crate::provider::Client,
    limiter: Arc<RateLimiter>,
    season: &'a str,
}

impl<'a> RosterSync<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        provider: &'a crate::provider::Client,
        limiter: Arc<RateLimiter>,
        season: &'a str,
    ) -> Self {
        Self {
            db,
            provider,
            limiter,
            season,
        }
    }

    /// Runs the roster pass for `team_id`. The caller has already verified
    /// the team exists locally and supplies its matchup abbreviation for
    /// game-log filtering. Returns the number of roster players reconciled.
    ///
    /// The pass commits three batches in dependency order: players, then
    /// player statistics, then the team dashboard. A failed game-log fetch
    /// for an individual player defaults that player to the all-zero record
    /// and does not abort the batch.
    pub async fn run(&self, team_id: i64, team_abbreviation: &str) -> Result<usize, Error> {
        let roster = self.fetch_roster(team_id).await?;
        let count = roster.len();

        let txn = self.db.begin().await?;
        let players = PlayerRepository::new(&txn).upsert_many(team_id, roster).await?;
        txn.commit().await?;

        let mut stats = Vec::with_capacity(players.len());
        for player in &players {
            let averages = match self.fetch_game_log(player.player_id).await {
                Ok(log) => season_averages(&log, team_abbreviation),
                Err(e) => {
                    warn!(
                        "Defaulting stats for player {} ({}) after game log fetch failure: {:?}",
                        player.player_id, player.full_name, e
                    );
                    SeasonAverages::default()
                }
            };
            stats.push((player.player_id, averages));
        }

        let txn = self.db.begin().await?;
        PlayerStatsRepository::new(&txn).upsert_many(stats).await?;
        txn.commit().await?;

        let dashboard = self.fetch_dashboard(team_id).await?;
        TeamStatsRepository::new(self.db)
            .upsert_dashboard(team_id, dashboard)
            .await?;

        info!("Synced roster of {} players for team {}", count, team_id);
        Ok(count)
    }

    async fn fetch_roster(
        &self,
        team_id: i64,
    ) -> Result<Vec<crate::provider::model::RosterEntry>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new(self.limiter.clone());
        let provider = self.provider.clone();
        let season = self.season.to_string();

        ctx.execute_with_retry(&format!("roster fetch for team {team_id}"), move |_| {
            let provider = provider.clone();
            let season = season.clone();
            Box::pin(async move { Ok(provider.get_roster(team_id, &season).await?) })
        })
        .await
    }

    async fn fetch_game_log(
        &self,
        player_id: i64,
    ) -> Result<Vec<crate::provider::model::GameLogEntry>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new(self.limiter.clone());
        let provider = self.provider.clone();
        let season = self.season.to_string();

        ctx.execute_with_retry(&format!("game log fetch for player {player_id}"), move |_| {
            let provider = provider.clone();
            let season = season.clone();
            Box::pin(async move { Ok(provider.get_player_game_log(player_id, &season).await?) })
        })
        .await
    }

    async fn fetch_dashboard(
        &self,
        team_id: i64,
    ) -> Result<crate::provider::model::TeamDashboard, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new(self.limiter.clone());
        let provider = self.provider.clone();
        let season = self.season.to_string();

        ctx.execute_with_retry(&format!("dashboard fetch for team {team_id}"), move |_| {
            let provider = provider.clone();
            let season = season.clone();
            Box::pin(async move { Ok(provider.get_team_dashboard(team_id, &season).await?) })
        })
        .await
    }
}
