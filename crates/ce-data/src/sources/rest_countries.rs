//! REST Countries data source
//!
//! Issues a single GET against the public REST Countries API with a fixed
//! field projection. A single best-effort attempt per app session: no
//! retry, no timeout tuning, no cancellation.

use async_trait::async_trait;
use reqwest::Client;

use ce_core::Country;

use super::CountrySource;
use crate::DataError;

/// Public endpoint serving the full dataset
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Fields requested from the API; everything else is left on the server
pub const FIELDS: &str = "name,capital,currencies,maps,timezones,flags,region,subregion,cca3";

/// Data source backed by the REST Countries API
pub struct RestCountriesSource {
    client: Client,
    endpoint: String,
}

impl RestCountriesSource {
    /// Create a source pointing at the public endpoint
    pub fn new() -> Result<Self, DataError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a source with a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, DataError> {
        let client = Client::builder()
            .user_agent(concat!("countryvis/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    async fn fetch_all(&self) -> Result<Vec<Country>, DataError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("fields", FIELDS)])
            .send()
            .await?
            .error_for_status()?;

        let countries = response.json::<Vec<Country>>().await?;
        Ok(countries)
    }

    fn source_name(&self) -> &str {
        &self.endpoint
    }
}
