use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::provider::model::{StandingRow, TeamDashboard};

pub struct TeamStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamStatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates the standings-derived fields by team ID.
    ///
    /// Per-game dashboard fields are left alone on update so a standings pass
    /// never clobbers them; new rows start them at zero.
    pub async fn upsert_standings(
        &self,
        rows: Vec<StandingRow>,
    ) -> Result<Vec<entity::team_stats::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let rows = rows.into_iter().map(|row| entity::team_stats::ActiveModel {
            team_id: ActiveValue::Set(row.team_id),
            wins: ActiveValue::Set(row.wins),
            losses: ActiveValue::Set(row.losses),
            win_pct: ActiveValue::Set(row.win_pct),
            conference_rank: ActiveValue::Set(row.playoff_rank),
            points_per_game: ActiveValue::Set(0.0),
            rebounds_per_game: ActiveValue::Set(0.0),
            assists_per_game: ActiveValue::Set(0.0),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        });

        entity::prelude::TeamStats::insert_many(rows)
            .on_conflict(
                OnConflict::column(entity::team_stats::Column::TeamId)
                    .update_columns([
                        entity::team_stats::Column::Wins,
                        entity::team_stats::Column::Losses,
                        entity::team_stats::Column::WinPct,
                        entity::team_stats::Column::ConferenceRank,
                        entity::team_stats::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Inserts or updates the per-game dashboard fields for one team,
    /// preserving standings fields on update.
    pub async fn upsert_dashboard(
        &self,
        team_id: i64,
        dashboard: TeamDashboard,
    ) -> Result<(), DbErr> {
        let row = entity::team_stats::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            wins: ActiveValue::Set(0),
            losses: ActiveValue::Set(0),
            win_pct: ActiveValue::Set(0.0),
            conference_rank: ActiveValue::Set(0),
            points_per_game: ActiveValue::Set(dashboard.points_per_game),
            rebounds_per_game: ActiveValue::Set(dashboard.rebounds_per_game),
            assists_per_game: ActiveValue::Set(dashboard.assists_per_game),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::TeamStats::insert(row)
            .on_conflict(
                OnConflict::column(entity::team_stats::Column::TeamId)
                    .update_columns([
                        entity::team_stats::Column::PointsPerGame,
                        entity::team_stats::Column::ReboundsPerGame,
                        entity::team_stats::Column::AssistsPerGame,
                        entity::team_stats::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_team_id(
        &self,
        team_id: i64,
    ) -> Result<Option<entity::team_stats::Model>, DbErr> {
        entity::prelude::TeamStats::find_by_id(team_id)
            .one(self.db)
            .await
    }
}
