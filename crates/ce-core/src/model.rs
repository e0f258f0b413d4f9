//! Record model for the REST Countries dataset
//!
//! Every field tolerates absence in the source JSON; missing values decode
//! to empty strings, empty lists, or `None` rather than failing the load.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Common and official names of a country
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,

    #[serde(default)]
    pub official: String,
}

/// Display name and symbol for one currency code
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrencyInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub symbol: String,
}

/// External map links for a country
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapLinks {
    #[serde(default, rename = "googleMaps")]
    pub google_maps: Option<String>,

    #[serde(default, rename = "openStreetMaps")]
    pub open_street_maps: Option<String>,
}

/// Flag image links; PNG is preferred over the SVG fallback
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlagLinks {
    #[serde(default)]
    pub png: Option<String>,

    #[serde(default)]
    pub svg: Option<String>,

    #[serde(default)]
    pub alt: Option<String>,
}

/// One country record
///
/// The dataset is an ordered sequence of these, immutable after load and
/// held for the lifetime of the app session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: CountryName,

    #[serde(default)]
    pub capital: Vec<String>,

    /// Currency code to info. A `BTreeMap` keeps code order deterministic.
    #[serde(default)]
    pub currencies: BTreeMap<String, CurrencyInfo>,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub subregion: String,

    #[serde(default)]
    pub timezones: Vec<String>,

    #[serde(default)]
    pub maps: MapLinks,

    #[serde(default)]
    pub flags: FlagLinks,

    /// ISO 3166-1 alpha-3 code, carried as a stable identifier
    #[serde(default)]
    pub cca3: String,
}

impl Country {
    /// Comma-joined capital list
    pub fn capital_text(&self) -> String {
        self.capital.join(", ")
    }

    /// Currencies rendered as `CODE - Name (Symbol)`, comma-joined
    ///
    /// The symbol is omitted when absent; a currency with no name renders
    /// as the bare code.
    pub fn currency_text(&self) -> String {
        self.currencies
            .iter()
            .map(|(code, info)| {
                if info.name.is_empty() {
                    code.clone()
                } else if info.symbol.is_empty() {
                    format!("{} - {}", code, info.name)
                } else {
                    format!("{} - {} ({})", code, info.name, info.symbol)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Currencies flattened to `code name symbol` for the search haystack
    pub fn currency_search_text(&self) -> String {
        self.currencies
            .iter()
            .map(|(code, info)| format!("{} {} {}", code, info.name, info.symbol))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First timezone entry, used for display
    pub fn timezone_text(&self) -> &str {
        self.timezones.first().map(String::as_str).unwrap_or("")
    }

    /// Map link, if the record carries one
    pub fn map_url(&self) -> Option<&str> {
        self.maps
            .google_maps
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    /// Flag image link, PNG preferred over SVG
    pub fn flag_url(&self) -> Option<&str> {
        self.flags
            .png
            .as_deref()
            .or(self.flags.svg.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Lowercased concatenation of the searchable display fields
    ///
    /// Global search matches a row iff the lowercased query is a substring
    /// of this text. Field order matches the rendered columns: names,
    /// capital, region, subregion, first timezone, map link, currencies.
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {}",
            self.name.common,
            self.name.official,
            self.capital_text(),
            self.region,
            self.subregion,
            self.timezone_text(),
            self.map_url().unwrap_or(""),
            self.currency_search_text(),
        )
        .to_lowercase()
    }
}
