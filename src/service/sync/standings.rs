use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};

use crate::data::{team::TeamRepository, team_stats::TeamStatsRepository};
use crate::error::Error;
use crate::service::rate_limit::RateLimiter;
use crate::service::retry::RetryContext;
use crate::service::sync::cache::SyncCache;

/// Reconciles league standings into team statistics rows and conference tags.
pub struct StandingsSync<'a> {
    db: &'a DatabaseConnection,
    provider: &'a crate::provider::Client,
    limiter: Arc<RateLimiter>,
    season: &'a str,
}

impl<'a> StandingsSync<'a> {
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

    /// Fetches standings and upserts statistics for every locally known team
    /// as one batch. Rows for teams not yet persisted are skipped with a
    /// warning; they will be picked up once the team directory has synced
    /// them. Returns the number of records reconciled.
    pub async fn run(&self, cache: &mut SyncCache) -> Result<usize, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new(self.limiter.clone());
        let provider = self.provider.clone();
        let season = self.season.to_string();

        let standings = ctx
            .execute_with_retry("league standings fetch", move |_| {
                let provider = provider.clone();
                let season = season.clone();
                Box::pin(async move { Ok(provider.get_standings(&season).await?) })
            })
            .await?;

        cache.ensure_loaded(self.db).await?;

        let mut known_rows = Vec::with_capacity(standings.len());
        for row in standings {
            if cache.contains_team(row.team_id) {
                known_rows.push(row);
            } else {
                warn!(
                    "Skipping standings row for unknown team ID {}",
                    row.team_id
                );
            }
        }

        let conferences: Vec<(i64, String)> = known_rows
            .iter()
            .map(|row| (row.team_id, row.conference.clone()))
            .collect();
        let count = known_rows.len();

        let txn = self.db.begin().await?;
        TeamStatsRepository::new(&txn)
            .upsert_standings(known_rows)
            .await?;
        TeamRepository::new(&txn)
            .update_conferences(conferences)
            .await?;
        txn.commit().await?;

        info!("Synced standings for {} teams", count);
        Ok(count)
    }
}
