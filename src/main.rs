use dioxus_logger::tracing;
use holocron::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::init_logger(&config) {
        eprintln!("Logger error: {}", e);
        std::process::exit(1);
    }

    match startup::connect_to_database(&config).await {
        Ok(_) => tracing::info!("Database schema is up to date"),
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    }
}
