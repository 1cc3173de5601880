use dotenvy::dotenv;
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uma_reference_bot::{
    bot::{self, BotData},
    config,
    core::{DatasetStore, HttpFeed, RefreshScheduler, TagStore},
    errors::{Error, Result},
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings
    let settings = config::load_default_settings()
        .inspect_err(|e| error!("Critical error loading settings: {}", e))?;
    let schedule = settings.schedule()?;
    info!("Successfully processed settings.");

    // 4. Start the refresh loop against an empty store; its first tick bootstraps
    let store = Arc::new(DatasetStore::new());
    let feed = HttpFeed::new(
        reqwest::Client::new(),
        settings.data_url.clone(),
        settings.fetch_timeout(),
    );
    info!("Dataset feed: {}", feed.url());
    let scheduler = RefreshScheduler::new(feed, Arc::clone(&store), schedule);
    tokio::spawn(scheduler.run());

    // 5. Run the bot
    // DISCORD_BOT_TOKEN is read here, directly before use, not stored in Settings
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    let tags = Arc::new(TagStore::new(settings.tag_path.clone()));
    let data = BotData::new(store, tags, Arc::new(settings));
    bot::run_bot(token, data).await
}
