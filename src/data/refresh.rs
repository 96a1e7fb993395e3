//! Staleness tracking per synced entity kind.
//!
//! One `refresh_tracker` row per [`RefreshKind`], created lazily on the first
//! successful sync. This is the sole gate that throttles redundant provider
//! calls: orchestration checks [`RefreshRepository::should_refresh`] before a
//! pass and calls [`RefreshRepository::mark_refreshed`] only after the pass
//! commits.

use chrono::{Duration, NaiveDateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// The closed set of tracked entity kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RefreshKind {
    Teams,
    Standings,
    Games,
    Rosters,
}

impl RefreshKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teams => "teams",
            Self::Standings => "standings",
            Self::Games => "games",
            Self::Rosters => "rosters",
        }
    }

    /// How long this kind's data stays fresh. The team directory barely
    /// changes mid-season; standings and scoreboards move daily.
    pub fn max_age(&self) -> Duration {
        match self {
            Self::Teams => Duration::hours(24),
            Self::Standings => Duration::hours(6),
            Self::Games => Duration::hours(1),
            Self::Rosters => Duration::hours(12),
        }
    }
}

impl std::fmt::Display for RefreshKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct RefreshRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RefreshRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether a refresh is due: true if the kind has never refreshed, or if
    /// its last refresh is older than `max_age`.
    pub async fn should_refresh(&self, kind: RefreshKind, max_age: Duration) -> Result<bool, DbErr> {
        self.should_refresh_at(kind, Utc::now().naive_utc(), max_age)
            .await
    }

    /// [`Self::should_refresh`] against an explicit clock.
    pub async fn should_refresh_at(
        &self,
        kind: RefreshKind,
        now: NaiveDateTime,
        max_age: Duration,
    ) -> Result<bool, DbErr> {
        let tracker = entity::prelude::RefreshTracker::find_by_id(kind.as_str())
            .one(self.db)
            .await?;

        Ok(match tracker {
            Some(tracker) => now - tracker.last_refresh > max_age,
            None => true,
        })
    }

    /// Whether this kind has ever completed a successful sync. Used for
    /// dependency gating: dependent kinds are skipped until their
    /// prerequisite kind has run at least once.
    pub async fn has_completed(&self, kind: RefreshKind) -> Result<bool, DbErr> {
        let tracker = entity::prelude::RefreshTracker::find_by_id(kind.as_str())
            .one(self.db)
            .await?;

        Ok(tracker.is_some())
    }

    /// Stamps the kind as refreshed now, creating the row on first call.
    pub async fn mark_refreshed(&self, kind: RefreshKind) -> Result<(), DbErr> {
        let tracker = entity::refresh_tracker::ActiveModel {
            entity: ActiveValue::Set(kind.as_str().to_string()),
            last_refresh: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::RefreshTracker::insert(tracker)
            .on_conflict(
                OnConflict::column(entity::refresh_tracker::Column::Entity)
                    .update_column(entity::refresh_tracker::Column::LastRefresh)
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
