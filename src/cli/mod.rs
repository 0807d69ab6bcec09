pub mod catalog;
pub mod day;
pub mod shopping;

use fitveg_shared::State;

/// Open the configured store, applying pending migrations first
pub async fn open(config: &fitveg::Config) -> anyhow::Result<State> {
    let pool = fitveg::create_pool(&config.database.url, config.database.max_connections).await?;
    fitveg::migrate(&pool).await?;

    Ok(State::new(pool))
}

#[tracing::instrument(skip(config))]
pub async fn migrate(config: fitveg::Config) -> anyhow::Result<()> {
    tracing::info!("Running database migrations...");

    let pool = fitveg::create_pool(&config.database.url, 1).await?;
    fitveg::migrate(&pool).await?;

    tracing::info!("Migrations completed successfully");
    println!("Store ready at {}", config.database.url);

    Ok(())
}
