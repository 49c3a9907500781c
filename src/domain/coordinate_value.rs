use crate::extensions::str_ext::FloatPrefix;
use serde::{Deserialize, Serialize};

/// A raw latitude or longitude as it arrives from callers, files or HTTP responses.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    /// Returns the numeric value, `NaN` for text without a numeric prefix.
    pub fn as_f64(&self) -> f64 {
        match self {
            CoordinateValue::Number(n) => *n,
            CoordinateValue::Text(text) => text.parse_float_prefix(),
        }
    }
}

impl From<f64> for CoordinateValue {
    fn from(value: f64) -> Self {
        CoordinateValue::Number(value)
    }
}

impl From<&str> for CoordinateValue {
    fn from(value: &str) -> Self {
        CoordinateValue::Text(value.to_string())
    }
}

impl From<String> for CoordinateValue {
    fn from(value: String) -> Self {
        CoordinateValue::Text(value)
    }
}
