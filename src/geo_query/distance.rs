use crate::domain::Coordinate;
use crate::geo_query::{GeoQueryError, ToCoordinate};

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers using the haversine formula on a spherical earth.
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    // Rounding can push h just above 1 for antipodal points.
    let h = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2)).min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Like [`distance`], but converts both arguments first.
pub fn distance_between<A, B>(from: &A, to: &B) -> Result<f64, GeoQueryError>
where
    A: ToCoordinate + ?Sized,
    B: ToCoordinate + ?Sized,
{
    let from = from.to_coordinate().map_err(GeoQueryError::InvalidCoordinate)?;
    let to = to.to_coordinate().map_err(GeoQueryError::InvalidCoordinate)?;
    Ok(distance(&from, &to))
}
