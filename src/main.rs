use anyhow::Context;
use clap::Parser;
use std::{fs, sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;
use trip_rust::{
    sdk::route::waypoint::{leg_distances_km, total_distance_km},
    sdk::util::{log::init_logging, rate_limit::wiki_limiter},
    EnrichConfig, ImageCache, RoutePlanner, Waypoint, WikiSummaryClient,
};

/// A CLI tool to sequence trip waypoints and attach place photos
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON array of waypoints: [{"name", "lat", "lng"}, ...].
    /// Falls back to a built-in demo itinerary when omitted.
    #[arg(short, long)]
    input: Option<String>,

    /// Where to write the ordered, enriched route
    #[arg(short, long, default_value = "route.json")]
    output: String,

    /// [Optional] Overall deadline in seconds; the build is cancelled
    /// once it passes
    #[arg(long)]
    max_secs: Option<u64>,
}

fn demo_waypoints() -> Vec<Waypoint> {
    let cities = [
        ("Delhi", 28.6139, 77.209),
        ("Taj Mahal", 27.1751, 78.0421),
        ("Jaipur", 26.9124, 75.7873),
        ("Goa", 15.2993, 74.1240),
        ("Chennai", 13.0827, 80.2707),
        ("Pune", 18.5165, 73.8567),
        ("Karachi", 24.8607, 67.0011),
    ];
    cities
        .into_iter()
        .map(|(name, lat, lng)| Waypoint {
            name: name.to_string(),
            lat,
            lng,
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Start with our custom logger
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // --- 1. Waypoint input ---
    let waypoints = match &cli.input {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read waypoint file {}", path))?;
            serde_json::from_str::<Vec<Waypoint>>(&data)
                .with_context(|| format!("Failed to parse waypoints from {}", path))?
        }
        None => {
            log::info!("No input file given, using the demo itinerary");
            demo_waypoints()
        }
    };
    log::info!("Loaded {} waypoints", waypoints.len());

    // --- 2. Dependency initialization ---
    let config = EnrichConfig::from_env();
    let limiter = wiki_limiter();
    let client = WikiSummaryClient::new(&config, limiter);
    let cache = Arc::new(ImageCache::new(Arc::new(client)));
    let planner = RoutePlanner::new(cache);

    let cancel = CancellationToken::new();
    if let Some(secs) = cli.max_secs {
        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            log::warn!("Deadline of {}s reached, cancelling route build", secs);
            canceller.cancel();
        });
    }

    // --- 3. Build the route ---
    let route = planner.build_route(&waypoints, &cancel).await?;

    let legs = leg_distances_km(&route);
    for (i, leg_km) in legs.iter().enumerate() {
        log::info!(
            "{} -> {} ({:.1} km)",
            route[i].name,
            route[i + 1].name,
            leg_km
        );
    }
    log::info!(
        "Route covers {} stops over {:.1} km",
        route.len(),
        total_distance_km(&route)
    );

    // --- 4. Output ---
    let json_output = serde_json::to_string_pretty(&route)?;
    fs::write(&cli.output, json_output)
        .with_context(|| format!("Failed to write route to {}", cli.output))?;
    log::info!("✅ Route written to {}", cli.output);

    Ok(())
}
