use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::util::stats::SeasonAverages;

pub struct PlayerStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerStatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates season averages by player ID, last write wins.
    pub async fn upsert_many(
        &self,
        stats: Vec<(i64, SeasonAverages)>,
    ) -> Result<Vec<entity::player_stats::Model>, DbErr> {
        if stats.is_empty() {
            return Ok(Vec::new());
        }

        let stats = stats
            .into_iter()
            .map(|(player_id, averages)| entity::player_stats::ActiveModel {
                player_id: ActiveValue::Set(player_id),
                games_played: ActiveValue::Set(averages.games_played),
                minutes_per_game: ActiveValue::Set(averages.minutes_per_game),
                points_per_game: ActiveValue::Set(averages.points_per_game),
                off_rebounds_per_game: ActiveValue::Set(averages.off_rebounds_per_game),
                def_rebounds_per_game: ActiveValue::Set(averages.def_rebounds_per_game),
                rebounds_per_game: ActiveValue::Set(averages.rebounds_per_game),
                assists_per_game: ActiveValue::Set(averages.assists_per_game),
                steals_per_game: ActiveValue::Set(averages.steals_per_game),
                blocks_per_game: ActiveValue::Set(averages.blocks_per_game),
                turnovers_per_game: ActiveValue::Set(averages.turnovers_per_game),
                fouls_per_game: ActiveValue::Set(averages.fouls_per_game),
                assist_turnover_ratio: ActiveValue::Set(averages.assist_turnover_ratio),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            });

        entity::prelude::PlayerStats::insert_many(stats)
            .on_conflict(
                OnConflict::column(entity::player_stats::Column::PlayerId)
                    .update_columns([
                        entity::player_stats::Column::GamesPlayed,
                        entity::player_stats::Column::MinutesPerGame,
                        entity::player_stats::Column::PointsPerGame,
                        entity::player_stats::Column::OffReboundsPerGame,
                        entity::player_stats::Column::DefReboundsPerGame,
                        entity::player_stats::Column::ReboundsPerGame,
                        entity::player_stats::Column::AssistsPerGame,
                        entity::player_stats::Column::StealsPerGame,
                        entity::player_stats::Column::BlocksPerGame,
                        entity::player_stats::Column::TurnoversPerGame,
                        entity::player_stats::Column::FoulsPerGame,
                        entity::player_stats::Column::AssistTurnoverRatio,
                        entity::player_stats::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_player_id(
        &self,
        player_id: i64,
    ) -> Result<Option<entity::player_stats::Model>, DbErr> {
        entity::prelude::PlayerStats::find_by_id(player_id)
            .one(self.db)
            .await
    }
}
