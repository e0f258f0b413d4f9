//! Main application entry point

use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Ui};
use parking_lot::RwLock;
use tracing::info;

use ce_core::{distinct_regions, Country, RegionSelection};
use ce_data::sources::rest_countries::DEFAULT_ENDPOINT;
use ce_data::{load_or_empty, CountrySource, RestCountriesSource};
use ce_ui::{apply_theme, region_tab_bar, Theme};
use ce_views::CountryTableView;

/// Dataset load progress
///
/// The fetch runs once per session; failure has already been masked as an
/// empty dataset by the time `Ready` is stored.
enum LoadState {
    Loading,
    Ready(Arc<Vec<Country>>),
}

/// Main application state
struct CountryExplorerApp {
    /// Load progress, written by the fetch task
    load_state: Arc<RwLock<LoadState>>,

    /// The immutable dataset, taken from the load state once ready
    dataset: Option<Arc<Vec<Country>>>,

    /// Distinct regions derived from the dataset
    regions: Vec<String>,

    /// Selected region tab
    selected_region: RegionSelection,

    /// Region-filtered rows, cached per selection
    filtered_cache: Option<(RegionSelection, Arc<Vec<Country>>)>,

    /// The table view and its view state
    table: CountryTableView,

    /// Tokio runtime driving the one-shot fetch
    _runtime: tokio::runtime::Runtime,
}

impl CountryExplorerApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());

        // Loaders for the flag column images
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new().unwrap();

        let load_state = Arc::new(RwLock::new(LoadState::Loading));
        Self::spawn_fetch(&runtime, load_state.clone(), cc.egui_ctx.clone());

        Self {
            load_state,
            dataset: None,
            regions: Vec::new(),
            selected_region: RegionSelection::All,
            filtered_cache: None,
            table: CountryTableView::new(),
            _runtime: runtime,
        }
    }

    /// Issue the single dataset fetch; a best-effort attempt per session
    fn spawn_fetch(
        runtime: &tokio::runtime::Runtime,
        load_state: Arc<RwLock<LoadState>>,
        egui_ctx: egui::Context,
    ) {
        runtime.spawn(async move {
            let countries = match RestCountriesSource::new() {
                Ok(source) => {
                    info!("Fetching dataset from {}", source.source_name());
                    let name = source.source_name().to_string();
                    load_or_empty(source.fetch_all().await, &name)
                }
                Err(err) => load_or_empty(Err(err), DEFAULT_ENDPOINT),
            };

            *load_state.write() = LoadState::Ready(Arc::new(countries));
            egui_ctx.request_repaint();
        });
    }

    /// Take the dataset out of the load state once the fetch resolves
    fn poll_load_state(&mut self) {
        if self.dataset.is_some() {
            return;
        }

        if let LoadState::Ready(data) = &*self.load_state.read() {
            self.regions = distinct_regions(data);
            self.dataset = Some(data.clone());
        }
    }

    /// Rows passing the region predicate, in dataset order
    fn region_rows(&mut self) -> Arc<Vec<Country>> {
        let dataset = match &self.dataset {
            Some(data) => data.clone(),
            None => return Arc::new(Vec::new()),
        };

        if self.selected_region == RegionSelection::All {
            return dataset;
        }

        match &self.filtered_cache {
            Some((selection, rows)) if *selection == self.selected_region => rows.clone(),
            _ => {
                let rows: Vec<Country> = dataset
                    .iter()
                    .filter(|c| self.selected_region.matches(c))
                    .cloned()
                    .collect();
                let rows = Arc::new(rows);
                self.filtered_cache = Some((self.selected_region.clone(), rows.clone()));
                rows
            }
        }
    }

    fn show_loading(&self, ui: &mut Ui) {
        ui.centered_and_justified(|ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        });
    }
}

impl eframe::App for CountryExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load_state();

        egui::TopBottomPanel::top("region_tabs").show(ctx, |ui| {
            region_tab_bar(ui, &self.regions, &mut self.selected_region);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.dataset.is_none() {
                self.show_loading(ui);
            } else {
                let rows = self.region_rows();
                self.table.ui(ui, &rows);
            }
        });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Country Explorer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Country Explorer",
        options,
        Box::new(|cc| Box::new(CountryExplorerApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
