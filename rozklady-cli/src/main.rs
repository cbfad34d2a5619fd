use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rozklady_client::config::DEFAULT_BASE_URL;
use rozklady_client::{logging, ClientConfig, RozkladyClient, StopConfig};
use tracing::info;

mod output;

/// Realtime departures for a Łódź public transport stop
///
/// Fetches the rozklady.lodz.pl realtime feed for one stop and prints the
/// next departures per line.
#[derive(Parser, Debug)]
#[command(name = "rozklady")]
#[command(about = "Realtime departures for a Lodz public transport stop")]
#[command(version)]
pub struct Args {
    /// Stop number as used by rozklady.lodz.pl
    #[arg(short, long)]
    pub stop: u32,

    /// Comma-separated lines to show (default: every line at the stop)
    #[arg(short, long, default_value = "")]
    pub lines: String,

    /// Include buses and other non-tram vehicles
    #[arg(long)]
    pub all_vehicles: bool,

    /// Print the parsed feed as JSON
    #[arg(long)]
    pub json: bool,

    /// Prefix for line names in text output
    #[arg(long, default_value = rozklady_client::config::DEFAULT_NAME_PREFIX)]
    pub name: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,

    /// Feed endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if self.stop == 0 {
            return Err(anyhow::anyhow!("Stop number must be positive"));
        }

        if self.timeout == 0 {
            return Err(anyhow::anyhow!("Timeout must be positive"));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level '{}'. Valid levels: error, warn, info, debug, trace",
                    self.log_level
                ));
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub stop: StopConfig,
    pub json: bool,
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            client: ClientConfig::new()
                .with_base_url(args.base_url)
                .with_timeout(Duration::from_secs(args.timeout)),
            stop: StopConfig::new(args.stop)
                .with_lines(&args.lines)
                .with_name_prefix(args.name)
                .with_only_trams(!args.all_vehicles),
            json: args.json,
            log_level: args.log_level.to_lowercase(),
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let client = RozkladyClient::with_config(config.client.clone())
        .context("Failed to create feed client")?;

    info!("Fetching stop {}", config.stop.stop_number);
    let departures = client
        .fetch_stop(&config.stop)
        .with_context(|| {
            format!(
                "Failed to fetch departures for stop {}",
                config.stop.stop_number
            )
        })?;

    if config.json {
        let json = serde_json::to_string_pretty(&departures)
            .context("Failed to serialize departures")?;
        println!("{}", json);
    } else {
        print!("{}", output::render_departures(&config.stop, &departures));
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;
    let config = Config::from(args);

    logging::init_logging_with_level(&config.log_level)
        .context("Failed to initialize logging")?;

    run(&config)
}
