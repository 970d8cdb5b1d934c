use anyhow::Context;
use mangashelf_lib::shared::utils::init_logger;
use mangashelf_lib::shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let state = tokio::task::spawn_blocking(move || mangashelf_lib::bootstrap(&config))
        .await
        .context("Startup task panicked")?
        .context("Failed to initialise application state")?;

    let pool = state.database.pool_status();
    log::info!(
        "mangashelf ready ({} of {} connections open)",
        pool.connections,
        pool.max_size
    );
    Ok(())
}
