use anyhow::Result;
use clap::Parser;
use order_summary_cli::{
    cli::{args::Args, commands::CliApp},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?;
    let level = if args.verbose { "debug" } else { config.log_level.as_str() };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("🧁 Order CLI starting in {} environment", config.environment);
    if config.is_production() && args.verbose {
        tracing::warn!("Verbose logging enabled in production");
    }

    CliApp::new().run(args).map_err(|e| {
        tracing::error!("Order CLI failed: {:#}", e);
        e
    })?;

    tracing::info!("🧁 Order CLI stopped");
    Ok(())
}
