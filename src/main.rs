//! Entry point: parse CLI, run the filter/rank pipeline, report.

use anyhow::Result;
use clap::Parser;
use snowcast::cli::SnowcastArgs;
use snowcast::config::RunConfig;
use snowcast::forecast::DarkSkyClient;
use snowcast::hikes::HikeLoader;
use snowcast::routing::DirectionsClient;
use snowcast::{email, pipeline, report};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "snowcast=debug" } else { "snowcast=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = SnowcastArgs::parse();
    init_tracing(args.verbose);

    let config = RunConfig::from_args(&args)?;

    let loader = HikeLoader::new()?;
    let hikes = loader.load(config.save_new_hike_data)?;
    if config.save_new_hike_data {
        loader.save(&hikes)?;
    }
    tracing::info!("Found {} hikes", hikes.len());

    let forecasts = DarkSkyClient::from_env()?;
    let routes = DirectionsClient::from_env()?;
    let candidates = pipeline::plan(&config, hikes, &forecasts, &routes);

    let report = report::render(&candidates);
    print!("{report}");

    let recipients = email::recipients_from_env();
    if !report.is_empty() && !recipients.is_empty() {
        let from_address = std::env::var(email::FROM_ADDRESS_VAR).unwrap_or_default();
        email::send_report(&from_address, &recipients, "Snowshoe hike forecast", &report)?;
    }

    Ok(())
}
