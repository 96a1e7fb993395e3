use sea_orm::entity::prelude::*;

/// A scheduled or completed game between two teams. Neither team owns the
/// game; both sides are plain foreign keys and the home/visitor roles are not
/// interchangeable.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    /// Provider game ID, reused as the primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub game_id: String,
    pub home_team_id: i64,
    pub visitor_team_id: i64,
    pub game_date: Date,
    /// Provider status code: 1 scheduled, 2 in progress, 3 final.
    pub status_id: i32,
    pub status_text: String,
    /// Scores are absent until the game has started.
    pub home_team_score: Option<i32>,
    pub visitor_team_score: Option<i32>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HomeTeamId",
        to = "super::team::Column::TeamId"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::VisitorTeamId",
        to = "super::team::Column::TeamId"
    )]
    VisitorTeam,
}

impl ActiveModelBehavior for ActiveModel {}
