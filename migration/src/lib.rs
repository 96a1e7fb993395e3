pub use sea_orm_migration::prelude::*;

mod m20250830_000001_create_team_table;
mod m20250830_000002_create_team_stats_table;
mod m20250830_000003_create_player_table;
mod m20250830_000004_create_player_stats_table;
mod m20250830_000005_create_game_table;
mod m20250830_000006_create_refresh_tracker_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250830_000001_create_team_table::Migration),
            Box::new(m20250830_000002_create_team_stats_table::Migration),
            Box::new(m20250830_000003_create_player_table::Migration),
            Box::new(m20250830_000004_create_player_stats_table::Migration),
            Box::new(m20250830_000005_create_game_table::Migration),
            Box::new(m20250830_000006_create_refresh_tracker_table::Migration),
        ]
    }
}
