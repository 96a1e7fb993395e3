use crate::config::Config;
use crate::error::Error;

/// Build and configure the stats provider client
pub fn build_provider_client(config: &Config) -> Result<crate::provider::Client, Error> {
    let provider = crate::provider::Client::builder()
        .base_url(&config.provider_base_url)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(provider)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
