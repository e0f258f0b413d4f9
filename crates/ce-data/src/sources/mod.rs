//! Dataset sources

pub mod rest_countries;
pub mod static_source;

pub use rest_countries::RestCountriesSource;
pub use static_source::StaticSource;

use async_trait::async_trait;

use ce_core::Country;

use crate::DataError;

/// Trait for country dataset sources
///
/// A source is queried exactly once per app session; the returned sequence
/// is held immutably for the lifetime of the page.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetch the full dataset
    async fn fetch_all(&self) -> Result<Vec<Country>, DataError>;

    /// Get the source name for logging
    fn source_name(&self) -> &str;
}
