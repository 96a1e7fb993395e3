//! HTTP client for the NBA stats provider.
//!
//! One method per consumed endpoint, each returning the typed records from
//! [`model`]. The client carries no retry or pacing logic of its own; callers
//! wrap every invocation in the retry service, which owns backoff and rate
//! limiting.

pub mod model;

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::provider::model::{
    GameLogEntry, RosterEntry, Scoreboard, StandingRow, TeamDashboard, TeamRecord,
};

#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure or undecodable payload.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// Provider answered with a non-success status.
    #[error("Provider returned status {status} for {path}")]
    Status { status: StatusCode, path: String },
    #[error("Invalid provider base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, ProviderError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ProviderError::InvalidBaseUrl("base URL not set".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Client {
            http: builder.build()?,
            base_url,
        })
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder {
            base_url: None,
            user_agent: None,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                path: path.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Lists every franchise in the league.
    pub async fn list_teams(&self) -> Result<Vec<TeamRecord>, ProviderError> {
        self.get("/teams", &[]).await
    }

    /// Current league standings for the given season.
    pub async fn get_standings(&self, season: &str) -> Result<Vec<StandingRow>, ProviderError> {
        self.get("/standings", &[("season", season.to_string())])
            .await
    }

    /// Current roster for one team.
    pub async fn get_roster(
        &self,
        team_id: i64,
        season: &str,
    ) -> Result<Vec<RosterEntry>, ProviderError> {
        self.get(
            &format!("/teams/{team_id}/roster"),
            &[("season", season.to_string())],
        )
        .await
    }

    /// Per-game raw stat log for one player across the season.
    pub async fn get_player_game_log(
        &self,
        player_id: i64,
        season: &str,
    ) -> Result<Vec<GameLogEntry>, ProviderError> {
        self.get(
            &format!("/players/{player_id}/gamelog"),
            &[("season", season.to_string())],
        )
        .await
    }

    /// Scoreboard (game headers plus line scores) for one calendar date.
    pub async fn get_scoreboard(&self, date: NaiveDate) -> Result<Scoreboard, ProviderError> {
        self.get(
            "/scoreboard",
            &[("date", date.format("%Y-%m-%d").to_string())],
        )
        .await
    }

    /// Season per-game averages for one team.
    pub async fn get_team_dashboard(
        &self,
        team_id: i64,
        season: &str,
    ) -> Result<TeamDashboard, ProviderError> {
        self.get(
            &format!("/teams/{team_id}/dashboard"),
            &[("season", season.to_string())],
        )
        .await
    }
}
