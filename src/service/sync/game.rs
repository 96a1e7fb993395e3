use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};

use crate::data::game::GameRepository;
use crate::error::Error;
use crate::service::rate_limit::RateLimiter;
use crate::service::retry::RetryContext;
use crate::service::sync::cache::SyncCache;

/// Reconciles one date's scoreboard into the game table.
pub struct GameSync<'a> {
    db: &'a DatabaseConnection,
    provider: &'a crate::provider::Client,
    limiter: Arc<RateLimiter>,
}

impl<'a> GameSync<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        provider: &'a crate::provider::Client,
        limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            db,
            provider,
            limiter,
        }
    }

    /// Fetches the scoreboard for `date`, joins line scores onto game
    /// headers, and upserts the games as one batch. Games referencing a team
    /// not persisted locally are skipped with a warning. Returns the number
    /// of records reconciled.
    pub async fn run(&self, date: NaiveDate, cache: &mut SyncCache) -> Result<usize, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new(self.limiter.clone());
        let provider = self.provider.clone();

        let scoreboard = ctx
            .execute_with_retry(&format!("scoreboard fetch for {date}"), move |_| {
                let provider = provider.clone();
                Box::pin(async move { Ok(provider.get_scoreboard(date).await?) })
            })
            .await?;

        cache.ensure_loaded(self.db).await?;

        // Scores live in the line-score rows, keyed by game and team
        let scores: HashMap<(String, i64), Option<i32>> = scoreboard
            .line_scores
            .into_iter()
            .map(|line| ((line.game_id, line.team_id), line.points))
            .collect();

        let mut games = Vec::with_capacity(scoreboard.games.len());
        for header in scoreboard.games {
            if !cache.contains_team(header.home_team_id)
                || !cache.contains_team(header.visitor_team_id)
            {
                warn!(
                    "Skipping game {} referencing unknown team ({} vs {})",
                    header.game_id, header.visitor_team_id, header.home_team_id
                );
                continue;
            }

            let home_score = scores
                .get(&(header.game_id.clone(), header.home_team_id))
                .copied()
                .flatten();
            let visitor_score = scores
                .get(&(header.game_id.clone(), header.visitor_team_id))
                .copied()
                .flatten();

            games.push((header, home_score, visitor_score));
        }

        let count = games.len();

        let txn = self.db.begin().await?;
        GameRepository::new(&txn).upsert_many(date, games).await?;
        txn.commit().await?;

        info!("Synced {} games for {}", count, date);
        Ok(count)
    }
}
