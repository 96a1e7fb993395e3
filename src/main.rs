use chrono::Utc;
use tracing::{error, info};

use fastbreak::config::Config;
use fastbreak::service::sync::SyncService;
use fastbreak::startup;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let provider = match startup::build_provider_client(&config) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Provider client error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting full refresh for season {}", config.season);

    let service = SyncService::new(&db, &provider, &config.season);
    let report = service.full_refresh(Utc::now().date_naive()).await;

    info!(
        "Refresh complete: teams={} standings={} games={} rosters={}",
        report.teams, report.standings, report.games, report.rosters
    );

    if !report.failed_team_ids.is_empty() {
        error!("Roster sync failed for teams: {:?}", report.failed_team_ids);
    }

    if !report.is_success() {
        std::process::exit(1);
    }
}
