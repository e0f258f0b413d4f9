//! Core functionality for the country explorer
//!
//! This crate provides the record model, the closed set of column
//! projections, and the region filter that sits between the data source
//! and the table view.

pub mod columns;
pub mod model;
pub mod region;

// Re-export commonly used types
pub use columns::{Column, SortDirection};
pub use model::{Country, CountryName, CurrencyInfo, FlagLinks, MapLinks};
pub use region::{distinct_regions, RegionSelection};
