//! Region tab bar rendered above the table

use egui::Ui;

use ce_core::RegionSelection;

use crate::theme::accent_color;

/// Render the region tabs and update the selection
///
/// Tabs show each derived region followed by "All", which is always last.
/// Returns true when the selection changed this frame.
pub fn region_tab_bar(ui: &mut Ui, regions: &[String], selected: &mut RegionSelection) -> bool {
    let mut changed = false;

    ui.horizontal_wrapped(|ui| {
        for region in regions {
            let choice = RegionSelection::Region(region.clone());
            if tab(ui, region, *selected == choice) {
                *selected = choice;
                changed = true;
            }
        }

        if tab(ui, "All", *selected == RegionSelection::All) {
            *selected = RegionSelection::All;
            changed = true;
        }
    });

    changed
}

fn tab(ui: &mut Ui, label: &str, active: bool) -> bool {
    let text = if active {
        egui::RichText::new(label).color(accent_color()).strong()
    } else {
        egui::RichText::new(label)
    };

    ui.selectable_label(active, text).clicked() && !active
}
