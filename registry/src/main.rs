use anyhow::{Context, Result};
use registry::{web, Config, Database};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[rocket::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let database = Database::connect(&config).context("failed to configure database pool")?;

    if config.migrate {
        // the db container may still be starting; pages report the failure meanwhile
        let database = database.clone();
        let (attempts, delay) = (config.migrate_attempts, config.migrate_retry_delay);
        rocket::tokio::spawn(async move {
            match database.migrate_until_ready(attempts, delay).await {
                Ok(()) => info!("database schema ready"),
                Err(e) => error!("migration failed: {e}"),
            }
        });
    }

    web::build(database)
        .launch()
        .await
        .context("failed to launch rocket instance")?;

    Ok(())
}
