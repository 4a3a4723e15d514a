//! Mail Composer - Main Entry Point

use mail_composer::app::application::run_app;
use mail_composer::domain::config::MailConfig;
use mail_composer::helpers::is_development;

fn main() -> anyhow::Result<()> {
    let default_level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    tracing::info!("Starting Mail Composer...");

    let config = MailConfig::load()?;
    tracing::debug!("Composer config: {:?}", config);

    run_app(config);
    Ok(())
}
