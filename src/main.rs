use tracing_subscriber::EnvFilter;

use tablewatch::config::AppConfig;
use tablewatch::services::availability::resdiary::ResDiaryClient;
use tablewatch::services::messaging::pushover::PushoverProvider;
use tablewatch::services::watcher;
use tablewatch::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!(
        "checking {} restaurant(s) for {} covers on {} (cutoff {})",
        config.restaurant_names.len(),
        config.covers,
        config.reservation_date,
        config.cutoff.format("%H:%M"),
    );
    if config.disable_pushover {
        tracing::info!("Pushover disabled, findings will only be logged");
    }

    let state = AppState {
        availability: Box::new(ResDiaryClient::new()),
        messaging: Box::new(PushoverProvider::new(config.pushover_api_key.clone())),
        config,
    };

    watcher::run(&state).await;

    Ok(())
}
