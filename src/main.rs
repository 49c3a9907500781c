use nearby::app_config::AppConfig;
use nearby::geo_query::{ResultCount, rank};
use nearby::places::load_places;
use nearby::position;
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let count = ResultCount::try_from(config.query().count())?;

    let provider = position::from_config(config.position())?;
    let current_position = provider.current_position().await?;
    info!("✅  Current position is {}", current_position);

    let places = load_places(Path::new(config.query().places())).await?;

    let ranked = rank(&current_position, &places)?;
    info!("🔥 {} nearest of {} places", count.get().min(ranked.len()), places.len());

    for entry in ranked.iter().take(count.get()) {
        println!("{}: {:.1} km", entry.candidate.name, entry.distance);
    }

    Ok(())
}
