use apartment_extract::app;
use apartment_extract::config::Config;
use apartment_extract::io::ConsoleProgress;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::parse();

    info!("🏠 Apartment listing extraction");
    info!("Input: {}", config.input.display());

    app::run(&config, &mut ConsoleProgress)?;
    Ok(())
}
