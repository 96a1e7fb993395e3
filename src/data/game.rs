use chrono::{NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::provider::model::GameHeader;

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates scoreboard games by provider game ID.
    ///
    /// Status and scores are overwritten on every pass; the matchup itself
    /// (teams and date) never changes once scheduled so those columns are
    /// only written on insert.
    pub async fn upsert_many(
        &self,
        date: NaiveDate,
        games: Vec<(GameHeader, Option<i32>, Option<i32>)>,
    ) -> Result<Vec<entity::game::Model>, DbErr> {
        if games.is_empty() {
            return Ok(Vec::new());
        }

        let games =
            games
                .into_iter()
                .map(|(header, home_score, visitor_score)| entity::game::ActiveModel {
                    game_id: ActiveValue::Set(header.game_id),
                    home_team_id: ActiveValue::Set(header.home_team_id),
                    visitor_team_id: ActiveValue::Set(header.visitor_team_id),
                    game_date: ActiveValue::Set(date),
                    status_id: ActiveValue::Set(header.status_id),
                    status_text: ActiveValue::Set(header.status_text),
                    home_team_score: ActiveValue::Set(home_score),
                    visitor_team_score: ActiveValue::Set(visitor_score),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                });

        entity::prelude::Game::insert_many(games)
            .on_conflict(
                OnConflict::column(entity::game::Column::GameId)
                    .update_columns([
                        entity::game::Column::StatusId,
                        entity::game::Column::StatusText,
                        entity::game::Column::HomeTeamScore,
                        entity::game::Column::VisitorTeamScore,
                        entity::game::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::GameDate.eq(date))
            .all(self.db)
            .await
    }
}
