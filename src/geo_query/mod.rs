mod distance;
mod nearest;
mod to_coordinate;

use crate::domain::CoordinateError;
use thiserror::Error;

pub use distance::{EARTH_RADIUS_KM, distance, distance_between};
pub use nearest::{Ranked, ResultCount, nearest_k, rank};
pub use to_coordinate::ToCoordinate;

#[derive(Error, PartialEq, Debug)]
pub enum GeoQueryError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[source] CoordinateError),
    #[error("invalid candidate at index {index}: {source}")]
    InvalidCandidateList { index: usize, source: CoordinateError },
    #[error("invalid result count {0}, must not be negative")]
    InvalidCount(i64),
}
