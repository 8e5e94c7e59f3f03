use crate::color::CategoryStyle;
use crate::data::aggregate::{build_dashboard, Dashboard};
use crate::data::filter::{default_allowed, filter_records, AllowedCategories};
use crate::data::model::FacilityDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which chart occupies the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    ByCategory,
    ByDistrict,
    Comparison,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<FacilityDataset>,

    /// Categories participating in aggregation and display.
    pub allowed: AllowedCategories,

    /// Category display order and colors.
    pub style: CategoryStyle,

    /// Derived views for the current dataset, rebuilt on every load.
    pub dashboard: Option<Dashboard>,

    /// Chart shown in the central panel.
    pub chart: ChartKind,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            allowed: default_allowed(),
            style: CategoryStyle::default(),
            dashboard: None,
            chart: ChartKind::ByCategory,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: filter through the allow-list and
    /// recompute every derived view from scratch.
    pub fn set_dataset(&mut self, dataset: FacilityDataset) {
        let filtered = filter_records(&dataset.facilities, &self.allowed);
        self.dashboard = Some(build_dashboard(&filtered, &self.style.order()));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }
}
