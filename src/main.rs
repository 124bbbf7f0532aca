use clap::Parser;
use link_shortener::config::Config;
use link_shortener::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::parse();
    config.validate()?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber: `EnvFilter` from the configured level, text or JSON output.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .or_else(|_| EnvFilter::try_new("info"))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to init tracing: {e}"))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to init tracing: {e}"))?;
    }

    Ok(())
}
