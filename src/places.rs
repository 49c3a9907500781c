use crate::domain::Place;
use crate::extensions::path_ext::FileName;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Reads a JSON array of places from `path`.
#[instrument]
pub async fn load_places(path: &Path) -> Result<Vec<Place>, PlacesError> {
    info!("📁 Loading places...");
    let content = fs::read_to_string(path).await.map_err(|source| PlacesError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let places = serde_json::from_str::<Vec<Place>>(&content).map_err(|source| PlacesError::Json {
        source,
        path: path.to_path_buf(),
    })?;

    info!("📁 Loading places... OK, {} loaded from '{}'", places.len(), path.string_file_name());
    Ok(places)
}

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("unable to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid places file '{}': {}", path.display(), source)]
    Json { source: serde_json::Error, path: PathBuf },
}
