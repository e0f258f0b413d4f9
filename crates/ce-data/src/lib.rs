//! Data sources for the country explorer

pub mod sources;

use thiserror::Error;
use tracing::{error, info};

use ce_core::Country;

// Re-exports
pub use sources::{CountrySource, RestCountriesSource, StaticSource};

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

/// Resolve a load result at the fetch boundary
///
/// Any failure is logged and masked as an empty dataset; the render path
/// never sees an error.
pub fn load_or_empty(result: Result<Vec<Country>, DataError>, source_name: &str) -> Vec<Country> {
    match result {
        Ok(countries) => {
            info!("Loaded {} records from {}", countries.len(), source_name);
            countries
        }
        Err(err) => {
            error!("Failed to load dataset from {}: {}", source_name, err);
            Vec::new()
        }
    }
}
