use crate::domain::CoordinateValue;
use serde::{Deserialize, Serialize};

/// A named location as read from a places file.
///
/// Coordinates are kept raw and only validated when the place takes part in a query.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(alias = "lat")]
    pub latitude: CoordinateValue,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: CoordinateValue,
}

impl Place {
    pub fn new(name: impl Into<String>, latitude: impl Into<CoordinateValue>, longitude: impl Into<CoordinateValue>) -> Self {
        Place {
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}
