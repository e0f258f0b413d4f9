//! User interface components for the country explorer
//!
//! This crate provides the egui-based chrome around the table view: the
//! application theme and the region tab bar.

pub mod region_tabs;
pub mod theme;

// Re-export commonly used types
pub use region_tabs::region_tab_bar;
pub use theme::{apply_theme, Theme};
