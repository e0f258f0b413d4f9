//! Region filter between the loaded dataset and the table view

use crate::model::Country;

/// The selected region tab
///
/// "All" is an explicit variant rather than a sentinel string; it matches
/// every row and removes the region predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionSelection {
    #[default]
    All,
    Region(String),
}

impl RegionSelection {
    /// Whether a record passes the region predicate
    pub fn matches(&self, country: &Country) -> bool {
        match self {
            RegionSelection::All => true,
            RegionSelection::Region(region) => country.region == *region,
        }
    }

    /// Tab label
    pub fn label(&self) -> &str {
        match self {
            RegionSelection::All => "All",
            RegionSelection::Region(region) => region,
        }
    }
}

/// Distinct non-empty region values across the dataset, sorted alphabetically
pub fn distinct_regions(countries: &[Country]) -> Vec<String> {
    let mut regions: Vec<String> = countries
        .iter()
        .map(|c| c.region.clone())
        .filter(|r| !r.is_empty())
        .collect();
    regions.sort();
    regions.dedup();
    regions
}
