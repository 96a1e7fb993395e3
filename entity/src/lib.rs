pub mod game;
pub mod player;
pub mod player_stats;
pub mod refresh_tracker;
pub mod team;
pub mod team_stats;

pub mod prelude {
    pub use crate::game::Entity as Game;
    pub use crate::player::Entity as Player;
    pub use crate::player_stats::Entity as PlayerStats;
    pub use crate::refresh_tracker::Entity as RefreshTracker;
    pub use crate::team::Entity as Team;
    pub use crate::team_stats::Entity as TeamStats;
}
