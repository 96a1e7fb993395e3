use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    /// Provider team ID, reused as the primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id: i64,
    pub abbreviation: String,
    pub full_name: String,
    pub city: String,
    pub nickname: String,
    /// East/West, written by the standings pass. "Unknown" until standings
    /// have synced at least once.
    pub conference: String,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
    #[sea_orm(has_one = "super::team_stats::Entity")]
    TeamStats,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::team_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
