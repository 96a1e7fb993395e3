//! Typed records returned by the stats provider.
//!
//! The provider's raw feed is loosely shaped tabular data; every record kind
//! is modelled here as an explicit struct with named, typed fields so that
//! shape problems surface as deserialization errors at the client boundary
//! instead of deep inside a sync pass.

use serde::{Deserialize, Serialize};

/// One franchise from the provider's team directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: i64,
    pub full_name: String,
    pub abbreviation: String,
    pub city: String,
    pub nickname: String,
}

/// One row of the league standings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: i64,
    pub conference: String,
    pub playoff_rank: i32,
    pub wins: i32,
    pub losses: i32,
    pub win_pct: f64,
}

/// One roster slot for a team. Jersey number, position, height, and weight
/// are display strings and may be missing for two-way or recently signed
/// players.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: i64,
    pub player_name: String,
    pub jersey: Option<String>,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
}

/// Minutes field of a game log row. The provider serves either a clock string
/// ("34:12"), a bare number, or nothing at all for DNP rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMinutes {
    Text(String),
    Number(f64),
    Missing,
}

impl Default for RawMinutes {
    fn default() -> Self {
        Self::Missing
    }
}

/// One game's raw counting stats from a player's season game log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameLogEntry {
    /// Matchup text, e.g. "LAL vs. BOS" or "LAL @ DEN". The leading
    /// abbreviation identifies which team the player logged the game for.
    pub matchup: String,
    #[serde(default)]
    pub minutes: RawMinutes,
    pub points: f64,
    pub off_rebounds: f64,
    pub def_rebounds: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub fouls: f64,
}

/// Header row for one game on the scoreboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHeader {
    pub game_id: String,
    pub home_team_id: i64,
    pub visitor_team_id: i64,
    /// Provider status code: 1 scheduled, 2 in progress, 3 final.
    pub status_id: i32,
    pub status_text: String,
}

/// Per-team score line for one game. Points are absent until tip-off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineScore {
    pub game_id: String,
    pub team_id: i64,
    pub points: Option<i32>,
}

/// Scoreboard for one calendar date: game headers plus line scores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub games: Vec<GameHeader>,
    pub line_scores: Vec<LineScore>,
}

/// Season per-game averages for one team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamDashboard {
    pub points_per_game: f64,
    pub rebounds_per_game: f64,
    pub assists_per_game: f64,
}
