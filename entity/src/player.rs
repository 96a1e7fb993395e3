use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    /// Provider player ID, reused as the primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: i64,
    pub full_name: String,
    pub jersey: Option<String>,
    pub position: Option<String>,
    /// Height/weight are display strings from the provider, never computed on.
    pub height: Option<String>,
    pub weight: Option<String>,
    /// Current team; overwritten when the roster pass observes a reassignment.
    pub team_id: i64,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::TeamId"
    )]
    Team,
    #[sea_orm(has_one = "super::player_stats::Entity")]
    PlayerStats,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::player_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
