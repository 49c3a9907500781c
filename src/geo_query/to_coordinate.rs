use crate::domain::{Coordinate, CoordinateError, Place};

/// Anything that can be interpreted as a validated [`Coordinate`].
pub trait ToCoordinate {
    fn to_coordinate(&self) -> Result<Coordinate, CoordinateError>;
}

impl ToCoordinate for Coordinate {
    fn to_coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Ok(*self)
    }
}

/// A raw `(latitude, longitude)` pair.
impl ToCoordinate for (f64, f64) {
    fn to_coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::new(self.0, self.1)
    }
}

impl ToCoordinate for Place {
    fn to_coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::new(self.latitude.as_f64(), self.longitude.as_f64())
    }
}

impl<T: ToCoordinate + ?Sized> ToCoordinate for &T {
    fn to_coordinate(&self) -> Result<Coordinate, CoordinateError> {
        (**self).to_coordinate()
    }
}
