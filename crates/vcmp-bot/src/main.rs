//! Main entry point for the VCMP status bot.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use vcmp_bot::VcmpBot;
use vcmp_common::init_logging;
use vcmp_config::ConfigLoader;

/// Discord bot reporting the live status of VCMP servers.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to a YAML configuration file.
    #[arg(short, long, env = "VCMP_BOT_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, overriding `RUST_LOG` and the configured level (e.g. "debug").
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config =
        ConfigLoader::load(args.config.as_deref()).context("Failed to load configuration")?;

    let _guard = init_logging(&config.logging, args.log_level.as_deref())
        .context("Failed to initialize logging")?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting VCMP status bot");

    let bot = VcmpBot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot stopped with error: {}", e);
        return Err(e.into());
    }

    info!("Bot shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["vcmp-bot", "--config", "bot.yaml", "--log-level", "debug"]);
        assert_eq!(args.config, Some(PathBuf::from("bot.yaml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_args_verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
