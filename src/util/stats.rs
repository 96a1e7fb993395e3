//! Stat normalization helpers.
//!
//! The provider mixes field representations: minutes arrive either as a
//! "MM:SS" clock string or a bare number, and derived ratios must survive
//! zero denominators. These helpers fold all of that into plain floats with
//! zero defaults so malformed fields never abort a sync pass.

use crate::provider::model::{GameLogEntry, RawMinutes};

/// Season per-game averages derived from a player's game log.
///
/// `Default` is the all-zero record used when a player has no qualifying
/// games, or when their game-log fetch failed outright.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeasonAverages {
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
    pub assist_turnover_ratio: f64,
}

/// Averages a game log down to season per-game numbers.
///
/// Only games logged for the player's current team count: the matchup text
/// leads with the abbreviation of the team the player suited up for, so rows
/// from a pre-trade stint fail the prefix check and are excluded. An empty
/// filtered set yields the all-zero record.
pub fn season_averages(log: &[GameLogEntry], team_abbreviation: &str) -> SeasonAverages {
    let team_games: Vec<&GameLogEntry> = log
        .iter()
        .filter(|entry| entry.matchup.starts_with(team_abbreviation))
        .collect();

    if team_games.is_empty() {
        return SeasonAverages::default();
    }

    let games_played = team_games.len() as f64;
    let mean = |f: &dyn Fn(&GameLogEntry) -> f64| {
        team_games.iter().map(|entry| f(entry)).sum::<f64>() / games_played
    };

    let avg_assists = mean(&|entry| entry.assists);
    let avg_turnovers = mean(&|entry| entry.turnovers);

    SeasonAverages {
        games_played: team_games.len() as i32,
        minutes_per_game: round1(mean(&|entry| minutes_to_float(&entry.minutes))),
        points_per_game: round1(mean(&|entry| entry.points)),
        off_rebounds_per_game: round1(mean(&|entry| entry.off_rebounds)),
        def_rebounds_per_game: round1(mean(&|entry| entry.def_rebounds)),
        rebounds_per_game: round1(mean(&|entry| entry.rebounds)),
        assists_per_game: round1(avg_assists),
        steals_per_game: round1(mean(&|entry| entry.steals)),
        blocks_per_game: round1(mean(&|entry| entry.blocks)),
        turnovers_per_game: round1(avg_turnovers),
        fouls_per_game: round1(mean(&|entry| entry.fouls)),
        assist_turnover_ratio: round2(safe_ratio(avg_assists, avg_turnovers)),
    }
}

/// Converts a minutes field to float minutes.
///
/// `"12:30"` becomes `12.5`; plain numerics pass through unchanged. Malformed
/// or missing values become `0.0`, never an error — a DNP row counts as zero
/// minutes.
pub fn minutes_to_float(minutes: &RawMinutes) -> f64 {
    match minutes {
        RawMinutes::Number(n) => *n,
        RawMinutes::Text(text) => parse_minutes_str(text),
        RawMinutes::Missing => 0.0,
    }
}

fn parse_minutes_str(text: &str) -> f64 {
    if let Some((minutes, seconds)) = text.split_once(':') {
        match (minutes.trim().parse::<i64>(), seconds.trim().parse::<i64>()) {
            (Ok(minutes), Ok(seconds)) => minutes as f64 + seconds as f64 / 60.0,
            _ => 0.0,
        }
    } else {
        text.trim().parse::<f64>().unwrap_or(0.0)
    }
}

/// Ratio with a zero default for zero or negative denominators.
///
/// The domain convention is that "no opportunities for the negative event"
/// reads as a zero ratio, not infinity or an error.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Rounds to one decimal place, the precision the provider displays per-game
/// averages at.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to two decimal places, used for the assist/turnover ratio.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
