use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(dash)) = (&state.dataset, &state.dashboard) {
            ui.label(format!(
                "{} facilities loaded, {} shown",
                ds.len(),
                dash.summary.total
            ));
            ui.separator();
        }

        for (kind, label) in [
            (ChartKind::ByCategory, "By Category"),
            (ChartKind::ByDistrict, "By District"),
            (ChartKind::Comparison, "Comparison"),
        ] {
            if ui.selectable_label(state.chart == kind, label).clicked() {
                state.chart = kind;
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – summary cards
// ---------------------------------------------------------------------------

/// Render the summary cards. Number formatting lives here, not in the
/// aggregator: counts get thousands separators, the rating one decimal.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Summary");
    ui.separator();

    let dashboard = match &state.dashboard {
        Some(dash) => dash,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let summary = &dashboard.summary;
    metric_card(ui, "Total Facilities", &format_count(summary.total));
    metric_card(ui, "Districts", &format_count(summary.districts));
    metric_card(ui, "Categories", &format_count(summary.categories));
    metric_card(ui, "Avg. Rating", &format!("{:.1}", summary.avg_rating));
}

fn metric_card(ui: &mut Ui, title: &str, value: &str) {
    ui.group(|ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(title).small().strong());
            ui.label(RichText::new(value).size(24.0));
        });
    });
    ui.add_space(4.0);
}

/// `1234567` → `"1,234,567"`.
fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Facilities table (bottom panel)
// ---------------------------------------------------------------------------

/// Render the facilities table, one row per filtered record.
pub fn facilities_table(ui: &mut Ui, state: &AppState) {
    let dashboard = match &state.dashboard {
        Some(dash) => dash,
        None => return,
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Name", "Category", "District", "Rating", "Address"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, dashboard.rows.len(), |mut row| {
                let facility = &dashboard.rows[row.index()];
                row.col(|ui| {
                    ui.label(&facility.name);
                });
                row.col(|ui| {
                    ui.label(&facility.category);
                });
                row.col(|ui| {
                    ui.label(&facility.district);
                });
                row.col(|ui| {
                    match facility.rating {
                        Some(r) => ui.label(format!("{r:.1}")),
                        None => ui.label("–"),
                    };
                });
                row.col(|ui| {
                    ui.label(&facility.address);
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open facility dataset")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} facilities from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
