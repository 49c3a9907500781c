use crate::domain::CoordinateValue;
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    position: PositionConfig,
    query: QueryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("NEARBY").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn position(&self) -> &PositionConfig {
        &self.position
    }

    pub fn query(&self) -> &QueryConfig {
        &self.query
    }
}

/// Where the current position comes from: an HTTP geolocation endpoint, or a fixed coordinate.
#[derive(Debug, Default, Deserialize)]
pub struct PositionConfig {
    url: Option<String>,
    latitude: Option<CoordinateValue>,
    longitude: Option<CoordinateValue>,
}

impl PositionConfig {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn fixed(&self) -> Option<(&CoordinateValue, &CoordinateValue)> {
        self.latitude.as_ref().zip(self.longitude.as_ref())
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    count: i64,
    places: String,
}

impl QueryConfig {
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn places(&self) -> &str {
        &self.places
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                position: PositionConfig::default(),
                query: QueryConfig {
                    count: 3,
                    places: "resources/places.json".to_string(),
                },
            },
        }
    }

    pub fn position_url(mut self, url: String) -> Self {
        self.config.position.url = Some(url);
        self
    }

    pub fn fixed_position(mut self, latitude: impl Into<CoordinateValue>, longitude: impl Into<CoordinateValue>) -> Self {
        self.config.position.latitude = Some(latitude.into());
        self.config.position.longitude = Some(longitude.into());
        self
    }

    pub fn count(mut self, count: i64) -> Self {
        self.config.query.count = count;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn deserializes_a_fixed_position() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [position]
            latitude = 51.8615899
            longitude = "4.3580323"

            [query]
            count = 3
            places = "resources/places.json"
            "#,
        )?;

        assert_eq!(config.position().url(), None);
        assert_eq!(
            config.position().fixed(),
            Some((&CoordinateValue::Number(51.8615899), &CoordinateValue::Text("4.3580323".to_string())))
        );
        assert_eq!(config.query().count(), 3);
        assert_eq!(config.query().places(), "resources/places.json");
        Ok(())
    }

    #[test]
    fn deserializes_a_position_url() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [position]
            url = "http://localhost:8080/position"

            [query]
            count = 5
            places = "places.json"
            "#,
        )?;

        assert_eq!(config.position().url(), Some("http://localhost:8080/position"));
        assert_eq!(config.position().fixed(), None);
        Ok(())
    }

    #[test]
    fn defaults_to_no_position_source() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [query]
            count = 1
            places = "places.json"
            "#,
        )?;

        assert_eq!(config.position().url(), None);
        assert_eq!(config.position().fixed(), None);
        Ok(())
    }

    #[test]
    fn fails_without_a_query_section() {
        let result = from_toml(
            r#"
            [position]
            url = "http://localhost:8080/position"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn builder_provides_test_defaults() {
        let config = AppConfigBuilder::new().count(7).build();

        assert_eq!(config.query().count(), 7);
        assert_eq!(config.position().url(), None);
    }
}
