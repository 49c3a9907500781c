pub mod app_config;
mod coordinate_deserializer;
pub mod domain;
pub mod extensions;
pub mod geo_query;
pub mod places;
pub mod position;
