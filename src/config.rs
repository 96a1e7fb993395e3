/// Default base URL for the NBA stats provider.
const DEFAULT_PROVIDER_BASE_URL: &str = "https://stats.nba.com/stats";
const DEFAULT_USER_AGENT: &str = concat!("fastbreak/", env!("CARGO_PKG_VERSION"));
const DEFAULT_SEASON: &str = "2024-25";

pub struct Config {
    pub database_url: String,
    pub provider_base_url: String,
    pub user_agent: String,
    /// Season string passed to season-scoped provider endpoints, e.g. "2024-25".
    pub season: String,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            provider_base_url: std::env::var("PROVIDER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_BASE_URL.to_string()),
            user_agent: std::env::var("USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            season: std::env::var("SEASON").unwrap_or_else(|_| DEFAULT_SEASON.to_string()),
        })
    }
}
