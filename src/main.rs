use anyhow::Result;
use getitdone::api::{RestApi, TodoApi};
use getitdone::config::Config;
use getitdone::logger::Logger;
use getitdone::ui;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;

    let api: Arc<dyn TodoApi> = Arc::new(RestApi::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_seconds),
    )?);

    // Run the TUI application
    ui::run_app(api, &config, logger).await?;

    Ok(())
}
