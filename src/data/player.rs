use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::provider::model::RosterEntry;

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates roster players by provider player ID.
    ///
    /// The team foreign key is overwritten too, which is how trades and
    /// reassignments propagate: the next roster pass for the receiving team
    /// claims the player.
    pub async fn upsert_many(
        &self,
        team_id: i64,
        roster: Vec<RosterEntry>,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        if roster.is_empty() {
            return Ok(Vec::new());
        }

        let players = roster.into_iter().map(|entry| entity::player::ActiveModel {
            player_id: ActiveValue::Set(entry.player_id),
            full_name: ActiveValue::Set(entry.player_name),
            jersey: ActiveValue::Set(entry.jersey),
            position: ActiveValue::Set(entry.position),
            height: ActiveValue::Set(entry.height),
            weight: ActiveValue::Set(entry.weight),
            team_id: ActiveValue::Set(team_id),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        });

        entity::prelude::Player::insert_many(players)
            .on_conflict(
                OnConflict::column(entity::player::Column::PlayerId)
                    .update_columns([
                        entity::player::Column::FullName,
                        entity::player::Column::Jersey,
                        entity::player::Column::Position,
                        entity::player::Column::Height,
                        entity::player::Column::Weight,
                        entity::player::Column::TeamId,
                        entity::player::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_team_id(&self, team_id: i64) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, player_id: i64) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }
}
