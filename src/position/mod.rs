mod http_provider;
mod provider;

use crate::app_config::PositionConfig;
use crate::domain::Coordinate;
use reqwest::Client;
use tracing::info;

pub use http_provider::HttpPositionProvider;
pub use provider::{FixedPositionProvider, PositionError, PositionProvider, UnsupportedPositionProvider};

/// Picks the position source: the configured URL first, then a fixed coordinate, otherwise none.
pub fn from_config(config: &PositionConfig) -> Result<Box<dyn PositionProvider>, PositionError> {
    if let Some(url) = config.url() {
        info!("📡 Using position from {}", url);
        return Ok(Box::new(HttpPositionProvider::new(Client::new(), url)));
    }

    if let Some((latitude, longitude)) = config.fixed() {
        let coordinate = Coordinate::parse(latitude.clone(), longitude.clone())?;
        info!("📍 Using fixed position {}", coordinate);
        return Ok(Box::new(FixedPositionProvider::new(coordinate)));
    }

    Ok(Box::new(UnsupportedPositionProvider))
}
