use crate::domain::{Coordinate, CoordinateValue};
use crate::position::{PositionError, PositionProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Asks an HTTP geolocation endpoint for the current position.
///
/// The endpoint must answer a `GET` with a JSON object holding `latitude` (or `lat`) and `longitude` (or `lng`, `lon`).
#[derive(Debug)]
pub struct HttpPositionProvider {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct PositionResponse {
    #[serde(alias = "lat")]
    latitude: CoordinateValue,
    #[serde(alias = "lng", alias = "lon")]
    longitude: CoordinateValue,
}

impl HttpPositionProvider {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        HttpPositionProvider { client, url: url.into() }
    }
}

#[async_trait]
impl PositionProvider for HttpPositionProvider {
    #[instrument(skip_all)]
    async fn current_position(&self) -> Result<Coordinate, PositionError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let position = response.json::<PositionResponse>().await?;
        debug!("Received position {:?} from {}", position, self.url);

        Ok(Coordinate::parse(position.latitude, position.longitude)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CoordinateError;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test(tokio::test)]
    async fn current_position_returns_the_reported_coordinate() -> Result<(), PositionError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/position")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"latitude": 51.8615899, "longitude": 4.3580323, "accuracy": 12}"#)
            .create_async()
            .await;

        let provider = HttpPositionProvider::new(Client::new(), format!("{}/position", server.url()));
        let position = provider.current_position().await?;

        mock.assert();
        assert_eq!(position, Coordinate::new(51.8615899, 4.3580323)?);
        Ok(())
    }

    #[test(tokio::test)]
    async fn current_position_accepts_short_names_and_strings() -> Result<(), PositionError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"{"lat": "-33.8688", "lon": "151.2093"}"#)
            .create_async()
            .await;

        let provider = HttpPositionProvider::new(Client::new(), server.url());
        let position = provider.current_position().await?;

        assert_eq!(position, Coordinate::new(-33.8688, 151.2093)?);
        Ok(())
    }

    #[test(tokio::test)]
    async fn current_position_rejects_an_out_of_range_position() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"{"latitude": 12.0, "longitude": 181.5}"#)
            .create_async()
            .await;

        let provider = HttpPositionProvider::new(Client::new(), server.url());
        let result = provider.current_position().await;

        assert!(matches!(
            result,
            Err(PositionError::InvalidPosition(CoordinateError::InvalidLongitude(l))) if l == 181.5
        ));
    }

    #[test(tokio::test)]
    async fn current_position_fails_on_an_error_status() {
        let mut server = mockito::Server::new_async().await;

        server.mock("GET", "/").with_status(503).create_async().await;

        let provider = HttpPositionProvider::new(Client::new(), server.url());
        let result = provider.current_position().await;

        assert!(matches!(result, Err(PositionError::Request(_))));
    }
}
