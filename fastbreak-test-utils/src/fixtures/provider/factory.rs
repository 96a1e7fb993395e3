//! Mock provider payload builders with default test values.

use fastbreak::provider::model::{
    GameHeader, GameLogEntry, LineScore, RawMinutes, RosterEntry, Scoreboard, StandingRow,
    TeamDashboard, TeamRecord,
};

pub fn mock_team(team_id: i64, abbreviation: &str) -> TeamRecord {
    TeamRecord {
        team_id,
        full_name: format!("Test Team {}", abbreviation),
        abbreviation: abbreviation.to_string(),
        city: "Test City".to_string(),
        nickname: format!("Nickname {}", abbreviation),
    }
}

pub fn mock_standing(team_id: i64, conference: &str, playoff_rank: i32) -> StandingRow {
    StandingRow {
        team_id,
        conference: conference.to_string(),
        playoff_rank,
        wins: 50,
        losses: 32,
        win_pct: 0.61,
    }
}

pub fn mock_roster_entry(player_id: i64, player_name: &str) -> RosterEntry {
    RosterEntry {
        player_id,
        player_name: player_name.to_string(),
        jersey: Some("23".to_string()),
        position: Some("F".to_string()),
        height: Some("6-9".to_string()),
        weight: Some("250".to_string()),
    }
}

/// A played game for the given team with fixed counting stats.
pub fn mock_game_log_entry(team_abbreviation: &str, points: f64) -> GameLogEntry {
    GameLogEntry {
        matchup: format!("{} vs. OPP", team_abbreviation),
        minutes: RawMinutes::Text("34:30".to_string()),
        points,
        off_rebounds: 2.0,
        def_rebounds: 6.0,
        rebounds: 8.0,
        assists: 6.0,
        steals: 1.0,
        blocks: 1.0,
        turnovers: 3.0,
        fouls: 2.0,
    }
}

pub fn mock_game_header(game_id: &str, home_team_id: i64, visitor_team_id: i64) -> GameHeader {
    GameHeader {
        game_id: game_id.to_string(),
        home_team_id,
        visitor_team_id,
        status_id: 3,
        status_text: "Final".to_string(),
    }
}

pub fn mock_line_score(game_id: &str, team_id: i64, points: Option<i32>) -> LineScore {
    LineScore {
        game_id: game_id.to_string(),
        team_id,
        points,
    }
}

/// Scoreboard with one finished game between the two teams.
pub fn mock_scoreboard(game_id: &str, home_team_id: i64, visitor_team_id: i64) -> Scoreboard {
    Scoreboard {
        games: vec![mock_game_header(game_id, home_team_id, visitor_team_id)],
        line_scores: vec![
            mock_line_score(game_id, home_team_id, Some(112)),
            mock_line_score(game_id, visitor_team_id, Some(104)),
        ],
    }
}

pub fn mock_dashboard(points_per_game: f64) -> TeamDashboard {
    TeamDashboard {
        points_per_game,
        rebounds_per_game: 44.2,
        assists_per_game: 26.5,
    }
}
