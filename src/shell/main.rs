use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, fmt};

use time_clock::modules::time_tracking::adapters::outbound::key_value_repository::KeyValueRepository;
use time_clock::modules::time_tracking::application::store::TimeTrackingStore;
use time_clock::shared::core::primitives::SystemClock;
use time_clock::shared::infrastructure::key_value_store::file_system::FileSystemKeyValueStore;
use time_clock::shell::config::Config;
use time_clock::shell::console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("time_clock=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), legacy_login = config.legacy_login, "starting time clock");

    let storage = Arc::new(FileSystemKeyValueStore::new(config.data_dir.clone()));
    let repository = Arc::new(KeyValueRepository::new(storage));
    let mut store =
        TimeTrackingStore::load(repository, Arc::new(SystemClock), config.seed_accounts()).await?;

    println!("time clock ready, type 'help' for commands");
    console::run(
        &mut store,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;
    Ok(())
}
