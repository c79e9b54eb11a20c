//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use vt_telemetry::{ALL_ROUTES, DEFAULT_JITTER_DEG};

#[derive(Parser, Debug)]
#[command(name = "vt-dashboard")]
#[command(version)]
#[command(about = "Simulated vehicle tracking with route filtering and speed-limit enforcement")]
pub struct Cli {
    /// Route to show; repeat to render several views of the same batch.
    #[arg(long, short = 'r', default_value = ALL_ROUTES)]
    pub route: Vec<String>,

    /// RNG seed for a reproducible batch (random if omitted)
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Registry TOML file (built-in Kenya demo registry if omitted)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Directory to write readings.csv and vehicle_map.geojson into
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Position jitter half-width in degrees
    #[arg(long, default_value_t = DEFAULT_JITTER_DEG)]
    pub jitter: f64,

    /// Print the route selector choices and exit
    #[arg(long)]
    pub list_routes: bool,
}
