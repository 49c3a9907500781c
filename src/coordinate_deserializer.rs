use crate::domain::{Coordinate, CoordinateValue};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            #[serde(alias = "lat")]
            latitude: CoordinateValue,
            #[serde(alias = "lng", alias = "lon")]
            longitude: CoordinateValue,
        }

        let inner = Inner::deserialize(deserializer)?;
        Coordinate::parse(inner.latitude, inner.longitude).map_err(Error::custom)
    }
}
