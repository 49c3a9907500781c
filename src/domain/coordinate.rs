use crate::domain::CoordinateValue;
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

/// A latitude/longitude pair in signed decimal degrees.
///
/// Only constructible through validation, so every `Coordinate` lies within [-90, 90] × [-180, 180].
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::InvalidCoordinateType);
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }

        Ok(Coordinate { latitude, longitude })
    }

    /// Builds a coordinate from numbers or strings, parsing strings by their leading numeric prefix.
    pub fn parse(latitude: impl Into<CoordinateValue>, longitude: impl Into<CoordinateValue>) -> Result<Self, CoordinateError> {
        Coordinate::new(latitude.into().as_f64(), longitude.into().as_f64())
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `(latitude, longitude)` in radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum CoordinateError {
    #[error("latitude and longitude must be finite numbers")]
    InvalidCoordinateType,
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
}
