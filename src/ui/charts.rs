use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::color::{series_palette, CategoryStyle};
use crate::data::aggregate::Dashboard;
use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Dashboard charts (central panel)
// ---------------------------------------------------------------------------

/// Render the selected chart in the central panel.
pub fn dashboard_chart(ui: &mut Ui, state: &AppState) {
    let dashboard = match &state.dashboard {
        Some(dash) => dash,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a facility dataset to view the dashboard  (File → Open…)");
            });
            return;
        }
    };

    match state.chart {
        ChartKind::ByCategory => category_chart(ui, dashboard, &state.style),
        ChartKind::ByDistrict => district_chart(ui, dashboard),
        ChartKind::Comparison => comparison_chart(ui, dashboard),
    }
}

/// Facilities by category: one bar per category in the fixed display
/// order, colored from the static category table.
fn category_chart(ui: &mut Ui, dashboard: &Dashboard, style: &CategoryStyle) {
    let charts: Vec<BarChart> = dashboard
        .by_category
        .iter()
        .enumerate()
        .map(|(i, (category, count))| {
            let bar = Bar::new(i as f64, *count as f64).width(0.7);
            BarChart::new(vec![bar])
                .color(style.color_for(category))
                .name(category)
        })
        .collect();

    let labels: Vec<String> = dashboard
        .by_category
        .iter()
        .map(|(category, _)| category.clone())
        .collect();

    Plot::new("category_chart")
        .legend(Legend::default())
        .y_axis_label("Facilities")
        .x_axis_formatter(move |mark: GridMark, _range| integer_tick(&labels, mark))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Facilities per district, in discovery order, single series.
fn district_chart(ui: &mut Ui, dashboard: &Dashboard) {
    let bars: Vec<Bar> = dashboard
        .by_district
        .iter()
        .enumerate()
        .map(|(i, (_, count))| Bar::new(i as f64, *count as f64).width(0.7))
        .collect();

    let labels: Vec<String> = dashboard
        .by_district
        .iter()
        .map(|(district, _)| district.clone())
        .collect();

    let chart = BarChart::new(bars)
        .color(Color32::from_rgb(0x34, 0x98, 0xdb))
        .name("Facilities per district");

    Plot::new("district_chart")
        .legend(Legend::default())
        .y_axis_label("Facilities")
        .x_axis_formatter(move |mark: GridMark, _range| integer_tick(&labels, mark))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

/// Category × district comparison: grouped bars, one series per category,
/// rendered from the complete cross-tab grid (zero cells and all).
fn comparison_chart(ui: &mut Ui, dashboard: &Dashboard) {
    let crosstab = &dashboard.comparison;

    let n_series = crosstab.categories.len().max(1);
    let bar_width = 0.8 / n_series as f64;
    let palette = series_palette(crosstab.categories.len());

    let charts: Vec<BarChart> = crosstab
        .categories
        .iter()
        .enumerate()
        .map(|(c, category)| {
            let offset = (c as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
            let bars: Vec<Bar> = crosstab.counts[c]
                .iter()
                .enumerate()
                .map(|(d, count)| Bar::new(d as f64 + offset, *count as f64).width(bar_width))
                .collect();
            BarChart::new(bars).color(palette[c]).name(category)
        })
        .collect();

    let labels = crosstab.districts.clone();

    Plot::new("comparison_chart")
        .legend(Legend::default())
        .y_axis_label("Facilities")
        .x_axis_formatter(move |mark: GridMark, _range| integer_tick(&labels, mark))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Label integer grid positions with the matching axis entry, everything
/// else with nothing.
fn integer_tick(labels: &[String], mark: GridMark) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}
