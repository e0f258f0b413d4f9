//! Derived row-model engine
//!
//! The visible rows are always
//! `rows → filter(globalSearch) → filter(columnFilters) → sort → page`;
//! the stages compose in this fixed order and never reorder based on other
//! state. The region predicate is applied by the caller before rows reach
//! this engine.

use ahash::AHashMap;

use ce_core::{Column, Country, SortDirection};

/// Selectable page sizes
pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

/// The active sort column and direction
///
/// At most one column sorts at a time; `None` on the table state means the
/// dataset order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: Column,
    pub direction: SortDirection,
}

/// Result of one derivation pass over the input rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    /// Indices into the input slice for the current page, in render order
    pub page_rows: Vec<usize>,

    /// Row count after search and column filters
    pub filtered: usize,

    /// Input row count before any filtering
    pub total: usize,

    /// Effective page index, clamped into range
    pub page_index: usize,

    /// Total page count for the filtered set
    pub page_count: usize,
}

/// Transient view state layered over the immutable dataset
///
/// Rebuilt from defaults on every app start; nothing here persists.
#[derive(Debug, Clone)]
pub struct TableState {
    global_filter: String,
    column_filters: AHashMap<Column, String>,
    sort: Option<SortSpec>,
    page_index: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            global_filter: String::new(),
            column_filters: AHashMap::new(),
            sort: None,
            page_index: 0,
            page_size: PAGE_SIZES[0],
        }
    }
}

impl TableState {
    /// Create a table state with default view settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Current global search text
    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    /// Set the global search text; changing it resets to the first page
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.global_filter {
            self.global_filter = text;
            self.page_index = 0;
        }
    }

    /// Current filter text for one column
    pub fn column_filter(&self, column: Column) -> &str {
        self.column_filters
            .get(&column)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set one column's filter text; changing it resets to the first page
    ///
    /// Only sortable columns accept filters; the widget columns ignore
    /// them.
    pub fn set_column_filter(&mut self, column: Column, text: impl Into<String>) {
        if !column.sortable() {
            return;
        }
        let text = text.into();
        if text != self.column_filter(column) {
            if text.is_empty() {
                self.column_filters.remove(&column);
            } else {
                self.column_filters.insert(column, text);
            }
            self.page_index = 0;
        }
    }

    /// The active sort, if any
    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Activate a sort; ascending and descending are separate triggers
    pub fn set_sort(&mut self, column: Column, direction: SortDirection) {
        if column.sortable() {
            self.sort = Some(SortSpec { column, direction });
        }
    }

    /// Remove the active sort, restoring dataset order
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Requested page index (the row model clamps it into range)
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Current page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size, keeping the page index subject to clamping
    pub fn set_page_size(&mut self, size: usize) {
        if size > 0 {
            self.page_size = size;
        }
    }

    /// Advance one page, bounded by the given page count
    pub fn next_page(&mut self, page_count: usize) {
        if self.page_index + 1 < page_count {
            self.page_index += 1;
        }
    }

    /// Go back one page
    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Jump to a page; the row model clamps out-of-range requests
    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Derive the visible row model from the input rows
    ///
    /// Filtering and sorting operate on each column's derived display
    /// text, not the raw record. The sort is stable, so ties keep dataset
    /// order.
    pub fn row_model(&self, rows: &[Country]) -> RowModel {
        let query = self.global_filter.to_lowercase();
        let needles: Vec<(Column, String)> = self
            .column_filters
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(&column, text)| (column, text.to_lowercase()))
            .collect();

        let mut indices: Vec<usize> = (0..rows.len())
            .filter(|&i| query.is_empty() || rows[i].search_haystack().contains(&query))
            .filter(|&i| {
                needles.iter().all(|(column, needle)| {
                    column
                        .display_text(&rows[i])
                        .to_lowercase()
                        .contains(needle.as_str())
                })
            })
            .collect();

        if let Some(spec) = self.sort {
            indices.sort_by(|&a, &b| {
                let key_a = spec.column.display_text(&rows[a]);
                let key_b = spec.column.display_text(&rows[b]);
                match spec.direction {
                    SortDirection::Ascending => key_a.cmp(&key_b),
                    SortDirection::Descending => key_b.cmp(&key_a),
                }
            });
        }

        let filtered = indices.len();
        let page_count = (filtered + self.page_size - 1) / self.page_size;
        let page_index = self.page_index.min(page_count.saturating_sub(1));
        let start = page_index * self.page_size;
        let end = (start + self.page_size).min(filtered);

        RowModel {
            page_rows: indices[start..end].to_vec(),
            filtered,
            total: rows.len(),
            page_index,
            page_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ce_core::{CountryName, CurrencyInfo, RegionSelection};

    fn country(common: &str, region: &str) -> Country {
        Country {
            name: CountryName {
                common: common.to_string(),
                official: format!("Republic of {}", common),
            },
            region: region.to_string(),
            ..Default::default()
        }
    }

    fn names(rows: &[Country], model: &RowModel) -> Vec<String> {
        model
            .page_rows
            .iter()
            .map(|&i| rows[i].name.common.clone())
            .collect()
    }

    fn sample() -> Vec<Country> {
        vec![
            country("Aria", "X"),
            country("Zeta", "Y"),
            country("Mira", "X"),
            country("Kelo", "Z"),
        ]
    }

    #[test]
    fn test_empty_search_matches_all_rows() {
        let rows = sample();
        let model = TableState::new().row_model(&rows);

        assert_eq!(model.filtered, 4);
        assert_eq!(model.total, 4);
        assert_eq!(model.page_rows, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_global_search_is_case_insensitive_substring() {
        let rows = sample();
        let mut state = TableState::new();
        state.set_global_filter("ZET");

        let model = state.row_model(&rows);
        assert_eq!(names(&rows, &model), vec!["Zeta"]);
    }

    #[test]
    fn test_global_search_covers_derived_currency_text() {
        let mut rows = sample();
        rows[0].currencies.insert(
            "XAU".into(),
            CurrencyInfo {
                name: "Gold".into(),
                symbol: "g".into(),
            },
        );
        let mut state = TableState::new();
        state.set_global_filter("gold");

        let model = state.row_model(&rows);
        assert_eq!(names(&rows, &model), vec!["Aria"]);
    }

    #[test]
    fn test_column_filter_scopes_to_one_column() {
        let rows = sample();
        let mut state = TableState::new();
        // "republic of" appears in every official name but no common name
        state.set_column_filter(Column::CommonName, "republic");
        assert_eq!(state.row_model(&rows).filtered, 0);

        state.set_column_filter(Column::CommonName, "");
        state.set_column_filter(Column::OfficialName, "republic");
        assert_eq!(state.row_model(&rows).filtered, 4);
    }

    #[test]
    fn test_widget_columns_reject_filters() {
        let rows = sample();
        let mut state = TableState::new();
        state.set_column_filter(Column::MapLink, "open");
        state.set_column_filter(Column::Flag, "png");

        assert_eq!(state.row_model(&rows).filtered, 4);
    }

    #[test]
    fn test_sort_descending_reverses_ascending_on_unique_keys() {
        let rows = sample();
        let mut state = TableState::new();

        state.set_sort(Column::CommonName, SortDirection::Ascending);
        let ascending = names(&rows, &state.row_model(&rows));
        assert_eq!(ascending, vec!["Aria", "Kelo", "Mira", "Zeta"]);

        state.set_sort(Column::CommonName, SortDirection::Descending);
        let descending = names(&rows, &state.row_model(&rows));
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_sort_is_stable_on_duplicate_keys() {
        let rows = sample();
        let mut state = TableState::new();
        state.set_sort(Column::Region, SortDirection::Ascending);

        // Aria and Mira share region "X"; dataset order breaks the tie
        let model = state.row_model(&rows);
        assert_eq!(names(&rows, &model), vec!["Aria", "Mira", "Zeta", "Kelo"]);
    }

    #[test]
    fn test_clear_sort_restores_dataset_order() {
        let rows = sample();
        let mut state = TableState::new();
        state.set_sort(Column::CommonName, SortDirection::Descending);
        state.clear_sort();

        assert_eq!(state.row_model(&rows).page_rows, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_page_count_is_ceil_of_filtered_over_size() {
        let rows: Vec<Country> = (0..23).map(|i| country(&format!("C{:02}", i), "R")).collect();
        let mut state = TableState::new();

        state.set_page_size(10);
        assert_eq!(state.row_model(&rows).page_count, 3);

        state.set_page_size(20);
        assert_eq!(state.row_model(&rows).page_count, 2);

        state.set_page_size(30);
        assert_eq!(state.row_model(&rows).page_count, 1);
    }

    #[test]
    fn test_page_windowing_and_navigation() {
        let rows: Vec<Country> = (0..25).map(|i| country(&format!("C{:02}", i), "R")).collect();
        let mut state = TableState::new();

        let first = state.row_model(&rows);
        assert_eq!(first.page_rows, (0..10).collect::<Vec<_>>());

        state.next_page(first.page_count);
        state.next_page(first.page_count);
        let last = state.row_model(&rows);
        assert_eq!(last.page_index, 2);
        assert_eq!(last.page_rows, (20..25).collect::<Vec<_>>());

        // Next at the last page is a no-op
        state.next_page(last.page_count);
        assert_eq!(state.row_model(&rows).page_index, 2);

        state.previous_page();
        assert_eq!(state.row_model(&rows).page_index, 1);
    }

    #[test]
    fn test_page_index_clamps_when_filter_shrinks_rows() {
        let rows: Vec<Country> = (0..25).map(|i| country(&format!("C{:02}", i), "R")).collect();
        let mut state = TableState::new();
        state.set_page_index(2);
        assert_eq!(state.row_model(&rows).page_index, 2);

        // The filter leaves a single page; a stale index clamps into range
        state.set_global_filter("c0");
        state.set_page_index(5);
        let model = state.row_model(&rows);
        assert_eq!(model.filtered, 10);
        assert_eq!(model.page_count, 1);
        assert_eq!(model.page_index, 0);
    }

    #[test]
    fn test_filter_change_resets_page_index() {
        let mut state = TableState::new();
        state.set_page_index(3);
        state.set_global_filter("x");
        assert_eq!(state.page_index(), 0);

        state.set_page_index(3);
        state.set_column_filter(Column::Region, "eur");
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_empty_filtered_set_yields_empty_page() {
        let rows = sample();
        let mut state = TableState::new();
        state.set_global_filter("no such row");

        let model = state.row_model(&rows);
        assert!(model.page_rows.is_empty());
        assert_eq!(model.filtered, 0);
        assert_eq!(model.page_count, 0);
        assert_eq!(model.page_index, 0);
    }

    #[test]
    fn test_stages_compose_in_fixed_order() {
        // Filter then sort: the sort only sees surviving rows, and paging
        // windows the sorted order.
        let rows: Vec<Country> = vec![
            country("Delta", "X"),
            country("Alpha", "X"),
            country("Echo", "Y"),
            country("Bravo", "X"),
        ];
        let mut state = TableState::new();
        state.set_column_filter(Column::Region, "x");
        state.set_sort(Column::CommonName, SortDirection::Ascending);

        let model = state.row_model(&rows);
        assert_eq!(names(&rows, &model), vec!["Alpha", "Bravo", "Delta"]);
    }

    #[test]
    fn test_end_to_end_region_search_and_sort() {
        // The worked example from the behavior contract
        let rows = vec![country("Aria", "X"), country("Zeta", "Y")];

        let selected = RegionSelection::Region("X".to_string());
        let region_filtered: Vec<Country> =
            rows.iter().filter(|c| selected.matches(c)).cloned().collect();
        let model = TableState::new().row_model(&region_filtered);
        assert_eq!(names(&region_filtered, &model), vec!["Aria"]);

        let mut state = TableState::new();
        state.set_global_filter("zeta");
        let model = state.row_model(&rows);
        assert_eq!(names(&rows, &model), vec!["Zeta"]);

        let mut state = TableState::new();
        state.set_sort(Column::CommonName, SortDirection::Ascending);
        let model = state.row_model(&rows);
        assert_eq!(names(&rows, &model), vec!["Aria", "Zeta"]);
    }
}
