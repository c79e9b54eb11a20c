//! vt-dashboard: terminal rendition of the vehicle tracking dashboard.
//!
//! One run is one "page load": build the registry, generate a batch of
//! simulated readings, then render one view per `--route` selection.  All
//! views share a single cached batch, the way a dashboard session keeps
//! showing the same snapshot while the user flips between routes.
//!
//! ```text
//! vt-dashboard                                   # all routes, random seed
//! vt-dashboard -s 42 -r "Nakuru Road" -r "All Routes"
//! vt-dashboard --registry demos/dashboard/registry.toml -o output/
//! RUST_LOG=debug vt-dashboard --list-routes
//! ```

mod cli;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use vt_core::{SimRng, Timestamp};
use vt_output::{CsvWriter, GeoJsonWriter, OutputWriter, TableWriter};
use vt_registry::Registry;
use vt_telemetry::{
    BatchCache, GeneratorConfig, Reading, RouteSelection, SpeedingSummary, TelemetryGenerator,
    filter_by_route, map_center, route_options,
};

use cli::Cli;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // 1. Registry.
    let registry = match &cli.registry {
        Some(path) => Registry::load_toml(path)
            .with_context(|| format!("loading registry {}", path.display()))?,
        None => Registry::kenya_demo()?,
    };

    if cli.list_routes {
        for option in route_options(&registry) {
            println!("{option}");
        }
        return Ok(());
    }

    // 2. Generator and RNG.
    let generator =
        TelemetryGenerator::with_config(&registry, GeneratorConfig { jitter_deg: cli.jitter })?;
    let mut rng = match cli.seed {
        Some(seed) => SimRng::new(seed),
        None => SimRng::from_entropy(),
    };
    let now = Timestamp::now();

    println!("=== Vehicle Tracking & Analytics ===");
    println!(
        "Vehicles: {}  |  Routes: {}  |  Seed: {}",
        registry.len(),
        registry.routes().len(),
        cli.seed.map_or_else(|| "random".to_owned(), |s| s.to_string()),
    );

    // 3. One view per selection, all from the same batch.
    let mut cache = BatchCache::new();
    for label in &cli.route {
        let selection = RouteSelection::parse(label);
        let batch = cache.get_or_generate(|| generator.generate_batch(&mut rng, now))?;
        let filtered = filter_by_route(&registry, batch, &selection)?;

        println!();
        render_view(&selection, &filtered)?;

        if let Some(dir) = &cli.out {
            let dir = view_dir(dir, &selection);
            write_files(&dir, &filtered)
                .with_context(|| format!("writing output to {}", dir.display()))?;
            println!("Wrote {}", dir.display());
        }
    }

    Ok(())
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render_view(selection: &RouteSelection, readings: &[Reading]) -> Result<()> {
    println!("Vehicles on route: {selection}");
    if readings.is_empty() {
        println!("No vehicles found for the selected route.");
    } else {
        let mut table = TableWriter::new(io::stdout().lock());
        table.write_readings(readings)?;
        table.finish()?;
    }

    if let Some(center) = map_center(readings) {
        println!("Map centre: {center}");
    }

    let summary = SpeedingSummary::from_readings(readings);
    println!("{}", summary.headline(selection));
    for line in summary.lines() {
        println!("{line}");
    }
    Ok(())
}

// ── File output ───────────────────────────────────────────────────────────────

/// `out/all-routes`, `out/nakuru-road`, …
fn view_dir(out: &Path, selection: &RouteSelection) -> PathBuf {
    let slug: String = selection
        .to_string()
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    out.join(slug)
}

fn write_files(dir: &Path, readings: &[Reading]) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let mut csv = CsvWriter::new(dir)?;
    let mut map = GeoJsonWriter::new(dir);
    for writer in [&mut csv as &mut dyn OutputWriter, &mut map] {
        writer.write_readings(readings)?;
        writer.finish()?;
    }
    Ok(())
}
