mod coordinate;
mod coordinate_value;
mod place;

pub use coordinate::{Coordinate, CoordinateError};
pub use coordinate_value::CoordinateValue;
pub use place::Place;
