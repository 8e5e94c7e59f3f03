/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → FacilityDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ FacilityDataset │  Vec<FacilityRecord>
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  category allow-list → filtered records
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ aggregate   │  summary, histograms, cross-tab, table rows
///   └────────────┘
/// ```
///
/// Everything below `loader` is pure: each stage produces new values from
/// its arguments and holds no state across calls.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
