//! Table view implementation

use egui::{ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use ce_core::{Column, Country, SortDirection};

use crate::engine::{RowModel, TableState, PAGE_SIZES};

/// Configuration for the country table
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub striped_rows: bool,
    pub resizable_columns: bool,
    pub flag_height: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            striped_rows: true,
            resizable_columns: true,
            flag_height: 20.0,
        }
    }
}

/// Header interactions collected during a frame and applied afterwards
enum HeaderAction {
    Sort(Column, SortDirection),
    Filter(Column, String),
}

/// Table view that renders the derived row model
pub struct CountryTableView {
    pub config: TableConfig,
    state: TableState,
}

impl CountryTableView {
    /// Create a new table view with default view state
    pub fn new() -> Self {
        Self {
            config: TableConfig::default(),
            state: TableState::new(),
        }
    }

    /// The underlying view state
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Render the toolbar and table for the given (region-filtered) rows
    pub fn ui(&mut self, ui: &mut Ui, rows: &[Country]) {
        let model = self.state.row_model(rows);

        self.toolbar(ui, &model);
        ui.add_space(4.0);

        ScrollArea::horizontal()
            .id_source("country_table")
            .show(ui, |ui| {
                self.render_table(ui, rows, &model);
            });
    }

    /// Global search box and pagination controls
    fn toolbar(&mut self, ui: &mut Ui, model: &RowModel) {
        ui.horizontal(|ui| {
            let mut query = self.state.global_filter().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Global Search")
                    .desired_width(280.0),
            );
            if response.changed() {
                self.state.set_global_filter(query);
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!(
                "Page {} of {} - Showing {} of {}",
                model.page_index + 1,
                model.page_count.max(1),
                model.page_rows.len(),
                model.total,
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut page_size = self.state.page_size();
                egui::ComboBox::from_id_source("country_table_page_size")
                    .selected_text(format!("{} / page", page_size))
                    .show_ui(ui, |ui| {
                        for size in PAGE_SIZES {
                            ui.selectable_value(&mut page_size, size, format!("{} / page", size));
                        }
                    });
                if page_size != self.state.page_size() {
                    self.state.set_page_size(page_size);
                }

                let can_next = model.page_index + 1 < model.page_count;
                if ui.add_enabled(can_next, egui::Button::new("Next")).clicked() {
                    self.state.next_page(model.page_count);
                }

                let can_previous = model.page_index > 0;
                if ui
                    .add_enabled(can_previous, egui::Button::new("Prev"))
                    .clicked()
                {
                    self.state.previous_page();
                }
            });
        });
    }

    fn render_table(&mut self, ui: &mut Ui, rows: &[Country], model: &RowModel) {
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;

        let mut builder = TableBuilder::new(ui)
            .striped(self.config.striped_rows)
            .resizable(self.config.resizable_columns)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .vscroll(true);

        for column in Column::ALL {
            let table_column = match column {
                Column::Flag => TableColumn::initial(60.0).at_least(50.0),
                Column::MapLink => TableColumn::initial(80.0).at_least(60.0),
                _ => TableColumn::initial(150.0)
                    .at_least(80.0)
                    .at_most(400.0)
                    .clip(true)
                    .resizable(self.config.resizable_columns),
            };
            builder = builder.column(table_column);
        }

        let mut actions: Vec<HeaderAction> = Vec::new();
        let state = &self.state;
        let flag_height = self.config.flag_height;

        builder
            .header(48.0, |mut header| {
                for column in Column::ALL {
                    header.col(|ui| {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.strong(column.title());
                                if column.sortable() {
                                    sort_buttons(ui, state, column, &mut actions);
                                }
                            });

                            if column.sortable() {
                                let mut text = state.column_filter(column).to_string();
                                let response = ui.add(
                                    egui::TextEdit::singleline(&mut text)
                                        .hint_text("Search...")
                                        .desired_width(f32::INFINITY),
                                );
                                if response.changed() {
                                    actions.push(HeaderAction::Filter(column, text));
                                }
                            }
                        });
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, model.page_rows.len(), |row_index, mut row| {
                    let country = &rows[model.page_rows[row_index]];
                    for column in Column::ALL {
                        row.col(|ui| match column {
                            Column::MapLink => {
                                if let Some(url) = country.map_url() {
                                    ui.hyperlink_to("Open", url);
                                }
                            }
                            Column::Flag => {
                                if let Some(url) = country.flag_url() {
                                    ui.add(egui::Image::from_uri(url).max_height(flag_height));
                                }
                            }
                            Column::CommonName => {
                                ui.strong(column.display_text(country));
                            }
                            _ => {
                                ui.label(column.display_text(country));
                            }
                        });
                    }
                });
            });

        // Apply header interactions after rendering
        for action in actions {
            match action {
                HeaderAction::Sort(column, direction) => self.state.set_sort(column, direction),
                HeaderAction::Filter(column, text) => self.state.set_column_filter(column, text),
            }
        }
    }
}

impl Default for CountryTableView {
    fn default() -> Self {
        Self::new()
    }
}

/// Ascending and descending triggers for one sortable column
fn sort_buttons(ui: &mut Ui, state: &TableState, column: Column, actions: &mut Vec<HeaderAction>) {
    let active = state.sort().filter(|spec| spec.column == column);
    let accent = ui.style().visuals.selection.bg_fill;

    let ascending_active = matches!(
        active,
        Some(spec) if spec.direction == SortDirection::Ascending
    );
    let ascending = egui::RichText::new("⏶").size(10.0);
    let ascending = if ascending_active {
        ascending.color(accent)
    } else {
        ascending
    };
    if ui
        .small_button(ascending)
        .on_hover_text("Sort ascending")
        .clicked()
    {
        actions.push(HeaderAction::Sort(column, SortDirection::Ascending));
    }

    let descending_active = matches!(
        active,
        Some(spec) if spec.direction == SortDirection::Descending
    );
    let descending = egui::RichText::new("⏷").size(10.0);
    let descending = if descending_active {
        descending.color(accent)
    } else {
        descending
    };
    if ui
        .small_button(descending)
        .on_hover_text("Sort descending")
        .clicked()
    {
        actions.push(HeaderAction::Sort(column, SortDirection::Descending));
    }
}
