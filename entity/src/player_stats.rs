use sea_orm::entity::prelude::*;

/// Per-game season averages for one player, one-to-one with [`super::player`].
///
/// Every field defaults to zero when the player has no qualifying games under
/// their current team.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: i64,
    pub games_played: i32,
    pub minutes_per_game: f64,
    pub points_per_game: f64,
    pub off_rebounds_per_game: f64,
    pub def_rebounds_per_game: f64,
    pub rebounds_per_game: f64,
    pub assists_per_game: f64,
    pub steals_per_game: f64,
    pub blocks_per_game: f64,
    pub turnovers_per_game: f64,
    pub fouls_per_game: f64,
    /// Assists over turnovers, zero when the player averages zero turnovers.
    pub assist_turnover_ratio: f64,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::PlayerId"
    )]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
