use dioxus_logger::tracing;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
};

/// Initialize the global logger at the configured level
pub fn init_logger(config: &Config) -> Result<(), Error> {
    let level = config
        .log_level
        .parse::<tracing::Level>()
        .map_err(|_| ConfigError::InvalidEnvValue {
            var: "LOG_LEVEL".to_string(),
            reason: format!("unknown log level {:?}", config.log_level),
        })?;

    dioxus_logger::init(level).map_err(|e| Error::InternalError(e.to_string()))?;

    Ok(())
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(config.database_sqlx_logging);

    let db = Database::connect(opt).await?;

    tracing::debug!("Connected to database, applying pending migrations");

    Migrator::up(&db, None).await?;

    Ok(db)
}
