use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FacilityScopeApp {
    pub state: AppState,
}

impl eframe::App for FacilityScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + chart selector ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: summary cards ----
        egui::SidePanel::left("summary_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Bottom panel: facilities table ----
        egui::TopBottomPanel::bottom("facilities_table")
            .default_height(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::facilities_table(ui, &self.state);
            });

        // ---- Central panel: selected chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts::dashboard_chart(ui, &self.state);
        });
    }
}
