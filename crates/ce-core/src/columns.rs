//! The closed set of table columns and their derived projections
//!
//! Each column projects a `Country` record onto the text it renders and
//! sorts by. The map-link and flag columns render widgets instead of text
//! and are excluded from sorting and filtering.

use crate::model::Country;

/// Table columns, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CommonName,
    OfficialName,
    Capital,
    Currency,
    Region,
    Subregion,
    Timezone,
    MapLink,
    Flag,
}

/// Sort direction for the active sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Column {
    /// All columns in render order
    pub const ALL: [Column; 9] = [
        Column::CommonName,
        Column::OfficialName,
        Column::Capital,
        Column::Currency,
        Column::Region,
        Column::Subregion,
        Column::Timezone,
        Column::MapLink,
        Column::Flag,
    ];

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Column::CommonName => "Common Name",
            Column::OfficialName => "Official Name",
            Column::Capital => "Capital",
            Column::Currency => "Currency",
            Column::Region => "Region",
            Column::Subregion => "Subregion",
            Column::Timezone => "Timezone",
            Column::MapLink => "Google Maps",
            Column::Flag => "Flag",
        }
    }

    /// Whether this column supports sorting (and therefore filtering)
    pub fn sortable(&self) -> bool {
        !matches!(self, Column::MapLink | Column::Flag)
    }

    /// The derived display text this column renders, sorts, and filters on
    ///
    /// Widget columns (map link, flag) have no display text.
    pub fn display_text(&self, country: &Country) -> String {
        match self {
            Column::CommonName => country.name.common.clone(),
            Column::OfficialName => country.name.official.clone(),
            Column::Capital => country.capital_text(),
            Column::Currency => country.currency_text(),
            Column::Region => country.region.clone(),
            Column::Subregion => country.subregion.clone(),
            Column::Timezone => country.timezone_text().to_string(),
            Column::MapLink | Column::Flag => String::new(),
        }
    }
}
