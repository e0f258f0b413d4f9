//! Table view for the country explorer
//!
//! The engine derives the visible row set from the immutable dataset and
//! the current view state; the table module renders it with egui.

pub mod engine;
mod tables;

pub use engine::{RowModel, SortSpec, TableState, PAGE_SIZES};
pub use tables::CountryTableView;
