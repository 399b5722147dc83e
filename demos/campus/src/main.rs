//! campus — plan one route over campus GeoJSON layers.
//!
//! ```text
//! campus --footpaths footpaths.geojson --entrances entrances.geojson \
//!        --bus-stops stops.geojson --metadata buildings/ bldg_12 bldg_40
//! ```
//!
//! Pass `--floor floor.geojson` to route between door ids (`p_12`) of that
//! floor.  Set `RUST_LOG=debug` to see skipped features and build summaries.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use cc_core::{Feature, MetadataMap, RoutingConfig};
use cc_geojson::{Layer, load_layer, load_metadata_dir, parse_metadata};
use cc_route::RoutePlannerBuilder;

#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(about = "Plan an accessible campus route and print it as JSON")]
struct Args {
    /// Route start: building id, bus stop id, or floor node id.
    start: String,

    /// Route end.
    end: String,

    /// Footpath LineStrings.
    #[arg(long)]
    footpaths: Option<PathBuf>,

    /// Entrance Points.
    #[arg(long)]
    entrances: Option<PathBuf>,

    /// Bus stop Points.
    #[arg(long)]
    bus_stops: Option<PathBuf>,

    /// Building footprints.
    #[arg(long)]
    buildings: Option<PathBuf>,

    /// Building metadata: one merged JSON file or a directory of per-building
    /// files.
    #[arg(long, short = 'm')]
    metadata: Option<PathBuf>,

    /// Floor corridors and doors.
    #[arg(long, short = 'f')]
    floor: Option<PathBuf>,

    /// JSON routing config; missing fields take their defaults.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Pretty-print the result.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let t0 = Instant::now();

    let config: RoutingConfig = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => RoutingConfig::default(),
    };

    let mut builder = RoutePlannerBuilder::new()
        .config(config)
        .footpaths(layer(args.footpaths.as_deref(), Layer::Footpaths)?)
        .entrances(layer(args.entrances.as_deref(), Layer::Entrances)?)
        .bus_stops(layer(args.bus_stops.as_deref(), Layer::BusStops)?)
        .buildings(layer(args.buildings.as_deref(), Layer::Buildings)?)
        .metadata(metadata(args.metadata.as_deref())?);
    if let Some(path) = &args.floor {
        builder = builder.floor(layer(Some(path.as_path()), Layer::Floor)?);
    }
    let planner = builder.build().context("building route planner")?;
    tracing::info!(elapsed_ms = t0.elapsed().as_millis() as u64, "data loaded");

    let route = planner
        .route(&args.start, &args.end)
        .with_context(|| format!("routing {} → {}", args.start, args.end))?;
    tracing::info!(
        kind = ?route.kind,
        distance = route.total_distance,
        vertices = route.route_coords.len(),
        passed = route.passed_points.len(),
        "route planned"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&route)?
    } else {
        serde_json::to_string(&route)?
    };
    println!("{json}");
    Ok(())
}

fn layer(path: Option<&Path>, kind: Layer) -> Result<Vec<Feature>> {
    let Some(path) = path else { return Ok(Vec::new()) };
    let loaded = load_layer(path, kind).with_context(|| format!("loading {}", path.display()))?;
    if loaded.skipped > 0 || loaded.bad_positions > 0 {
        tracing::info!(
            path = %path.display(),
            skipped = loaded.skipped,
            bad_positions = loaded.bad_positions,
            "malformed input"
        );
    }
    Ok(loaded.features)
}

fn metadata(path: Option<&Path>) -> Result<MetadataMap> {
    let Some(path) = path else { return Ok(MetadataMap::new()) };
    let map = if path.is_dir() {
        load_metadata_dir(path)?
    } else {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading metadata {}", path.display()))?;
        parse_metadata(&text)?
    };
    tracing::info!(buildings = map.len(), "metadata loaded");
    Ok(map)
}
