//! In-memory data source for tests and demos

use async_trait::async_trait;

use ce_core::Country;

use super::CountrySource;
use crate::DataError;

/// Data source serving a fixed in-memory dataset
pub struct StaticSource {
    countries: Vec<Country>,
    name: String,
}

impl StaticSource {
    /// Create a source from an in-memory dataset
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            name: "static".to_string(),
        }
    }

    /// Create a source by decoding a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let countries = serde_json::from_str(json)?;
        Ok(Self::new(countries))
    }
}

#[async_trait]
impl CountrySource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<Country>, DataError> {
        Ok(self.countries.clone())
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_or_empty;

    const SAMPLE: &str = r#"[
        {
            "name": {"common": "France", "official": "French Republic"},
            "capital": ["Paris"],
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "region": "Europe",
            "subregion": "Western Europe",
            "timezones": ["UTC+01:00"],
            "maps": {"googleMaps": "https://goo.gl/maps/g7QxxSFsWyTPKuzd7"},
            "flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg"},
            "cca3": "FRA"
        },
        {
            "name": {"common": "Antarctica"},
            "region": "Antarctic",
            "timezones": ["UTC-03:00"]
        }
    ]"#;

    #[tokio::test]
    async fn test_fetch_all_returns_decoded_records() {
        let source = StaticSource::from_json(SAMPLE).unwrap();
        let countries = source.fetch_all().await.unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name.common, "France");
        assert_eq!(countries[0].currency_text(), "EUR - Euro (€)");
        assert_eq!(countries[1].name.common, "Antarctica");
        assert_eq!(countries[1].capital_text(), "");
    }

    #[test]
    fn test_from_json_rejects_malformed_payload() {
        assert!(StaticSource::from_json("{not json").is_err());
        assert!(StaticSource::from_json(r#"{"object": "not an array"}"#).is_err());
    }

    #[test]
    fn test_failed_load_renders_as_empty_dataset() {
        let result = StaticSource::from_json("<!doctype html>").map(|_| Vec::new());
        assert!(load_or_empty(result, "bad payload").is_empty());
    }
}
