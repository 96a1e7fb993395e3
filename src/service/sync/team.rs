use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::data::team::TeamRepository;
use crate::error::Error;
use crate::service::rate_limit::RateLimiter;
use crate::service::retry::RetryContext;

/// Reconciles the provider's team directory against the local team table.
pub struct TeamSync<'a> {
    db: &'a DatabaseConnection,
    provider: &'a crate::provider::Client,
    limiter: Arc<RateLimiter>,
}

impl<'a> TeamSync<'a> {
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

    /// Fetches all teams and upserts them as one batch. Returns the number of
    /// records reconciled.
    pub async fn run(&self) -> Result<usize, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new(self.limiter.clone());
        let provider = self.provider.clone();

        let teams = ctx
            .execute_with_retry("team directory fetch", move |_| {
                let provider = provider.clone();
                Box::pin(async move { Ok(provider.list_teams().await?) })
            })
            .await?;

        let count = teams.len();

        let txn = self.db.begin().await?;
        TeamRepository::new(&txn).upsert_many(teams).await?;
        txn.commit().await?;

        info!("Synced {} teams", count);
        Ok(count)
    }
}
