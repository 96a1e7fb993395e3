//! Mock HTTP endpoint creation for the stats provider.
//!
//! Each method registers a mock GET endpoint on the setup's mockito server and
//! verifies it was called the expected number of times.

use fastbreak::provider::model::{
    GameLogEntry, RosterEntry, Scoreboard, StandingRow, TeamDashboard, TeamRecord,
};
use mockito::{Matcher, Mock};

use crate::fixtures::provider::ProviderFixtures;

impl<'a> ProviderFixtures<'a> {
    pub fn create_teams_endpoint(
        &mut self,
        mock_teams: Vec<TeamRecord>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/teams")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_teams).unwrap())
            .expect(expected_requests)
            .create()
    }

    pub fn create_standings_endpoint(
        &mut self,
        mock_standings: Vec<StandingRow>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/standings")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_standings).unwrap())
            .expect(expected_requests)
            .create()
    }

    pub fn create_roster_endpoint(
        &mut self,
        team_id: i64,
        mock_roster: Vec<RosterEntry>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/teams/{}/roster", team_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_roster).unwrap())
            .expect(expected_requests)
            .create()
    }

    pub fn create_game_log_endpoint(
        &mut self,
        player_id: i64,
        mock_log: Vec<GameLogEntry>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/{}/gamelog", player_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_log).unwrap())
            .expect(expected_requests)
            .create()
    }

    pub fn create_scoreboard_endpoint(
        &mut self,
        mock_scoreboard: Scoreboard,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/scoreboard")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_scoreboard).unwrap())
            .expect(expected_requests)
            .create()
    }

    pub fn create_dashboard_endpoint(
        &mut self,
        team_id: i64,
        mock_dashboard: TeamDashboard,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/teams/{}/dashboard", team_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_dashboard).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Endpoint that answers with the given status code and an empty body.
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
