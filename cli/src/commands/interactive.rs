//! Interactive mode command

use crate::interactive::app::run_interactive;
use anyhow::Result;
use tracing::debug;

/// Start the interactive demo
pub async fn interactive_command(config_loader: crate::config::DemoConfigLoader) -> Result<()> {
    // Load demo configuration
    let config = config_loader.load().await?;
    debug!(
        seed = ?config.seed,
        delay_ms = ?config.delay_ms,
        skip_delays = config.skip_delays,
        "starting interactive demo"
    );

    run_interactive(config).await
}
