use crate::domain::{Coordinate, CoordinateError};
use async_trait::async_trait;
use thiserror::Error;

/// A source of the caller's current position.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate, PositionError>;
}

/// Always reports the same, already validated, position.
#[derive(Debug)]
pub struct FixedPositionProvider(Coordinate);

impl FixedPositionProvider {
    pub fn new(coordinate: Coordinate) -> Self {
        FixedPositionProvider(coordinate)
    }
}

#[async_trait]
impl PositionProvider for FixedPositionProvider {
    async fn current_position(&self) -> Result<Coordinate, PositionError> {
        Ok(self.0)
    }
}

/// Used when no position source is available.
#[derive(Debug)]
pub struct UnsupportedPositionProvider;

#[async_trait]
impl PositionProvider for UnsupportedPositionProvider {
    async fn current_position(&self) -> Result<Coordinate, PositionError> {
        Err(PositionError::UnsupportedEnvironment)
    }
}

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("geolocation is not supported in this environment")]
    UnsupportedEnvironment,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] CoordinateError),
}
