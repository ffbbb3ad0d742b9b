//! `apura`: a console watcher for TSE election tallies.
//!
//! Polls the simplified-tally endpoint on a fixed interval and redraws
//! a ranked candidate table. Diagnostics go to stderr so the table on
//! stdout stays clean.

mod render;
mod watch;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use apura_core::{load_app_config, AppConfig, Locale};

#[derive(Debug, Parser)]
#[command(name = "apura", version)]
#[command(about = "Console watcher for TSE election tallies")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Poll the tally endpoint and redraw the console on a fixed interval
    Watch {
        /// Override the tally endpoint URL
        #[arg(long)]
        url: Option<String>,
        /// Override the refresh interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Override the display locale ("pt-BR" or "en-US")
        #[arg(long)]
        locale: Option<String>,
    },
    /// Fetch the tally once and print it without clearing the screen
    Once {
        /// Override the tally endpoint URL
        #[arg(long)]
        url: Option<String>,
        /// Override the display locale ("pt-BR" or "en-US")
        #[arg(long)]
        locale: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let mut config = load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Watch {
            url,
            interval_ms,
            locale,
        }) => {
            apply_overrides(&mut config, url, interval_ms, locale)?;
            watch::run_watch(&config).await
        }
        Some(Commands::Once { url, locale }) => {
            apply_overrides(&mut config, url, None, locale)?;
            watch::run_once(&config).await
        }
        None => watch::run_watch(&config).await,
    }
}

/// Layers command-line overrides onto the environment-derived config.
fn apply_overrides(
    config: &mut AppConfig,
    url: Option<String>,
    interval_ms: Option<u64>,
    locale: Option<String>,
) -> anyhow::Result<()> {
    if let Some(url) = url {
        config.endpoint_url = url;
    }
    if let Some(interval_ms) = interval_ms {
        config.interval_ms = interval_ms;
    }
    if let Some(tag) = locale {
        config.locale = Locale::from_tag(&tag).ok_or_else(|| {
            anyhow::anyhow!("unrecognized locale '{tag}' (expected \"pt-BR\" or \"en-US\")")
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
