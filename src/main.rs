//! fleetview - Entry Point

use clap::Parser;
use fleetview::model::FilterCriteria;
use fleetview::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// TUI client for browsing rentable vehicles from a search endpoint
#[derive(Parser, Debug)]
#[command(name = "fleetview")]
#[command(version)]
#[command(about = "Browse rentable vehicles from a search endpoint")]
pub struct Args {
    /// Search endpoint URL (overrides config file and FLEETVIEW_ENDPOINT)
    #[arg(long, conflicts_with = "fixture")]
    pub endpoint: Option<String>,

    /// Read the vehicle list from a local JSON file instead of the endpoint
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Vehicles per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with the availability filter active
    #[arg(long)]
    pub available: bool,

    /// Start with a fuel-type filter, e.g. "diesel"
    #[arg(long, value_name = "TYPE")]
    pub fuel: Option<String>,

    /// Start with the towbar filter active
    #[arg(long)]
    pub towbar: bool,

    /// Start with the winter-tires filter active
    #[arg(long)]
    pub winter_tires: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Initial filter criteria from the CLI presets.
    fn initial_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            only_available: self.available,
            fuel_type: self.fuel.clone().unwrap_or_default(),
            towbar: self.towbar,
            winter_tires: self.winter_tires,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve configuration with the full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = fleetview::config::load_config_with_precedence(args.config.clone())?;
        let merged = fleetview::config::merge_config(config_file);
        let with_env = fleetview::config::apply_env_overrides(merged);
        fleetview::config::apply_cli_overrides(
            with_env,
            args.endpoint.clone(),
            args.page_size.map(usize::from),
        )
    };

    fleetview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let criteria = args.initial_criteria();
    let colors = ColorConfig::from_env_and_args(args.no_color);
    let source = fleetview::source::detect_search_source(args.fixture.clone(), &config.endpoint)?;

    fleetview::view::run_with_source(source, &config, criteria, colors)?;

    Ok(())
}
