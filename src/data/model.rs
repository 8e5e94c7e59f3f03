use serde::Serialize;

// ---------------------------------------------------------------------------
// FacilityRecord – one row of the source dataset
// ---------------------------------------------------------------------------

/// A single community facility (one entry of the source dataset).
///
/// The source JSON calls the category field `type`; the `Serialize` impl
/// keeps that name so generated files round-trip through the loader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityRecord {
    pub name: String,
    /// Facility kind, e.g. "Hospital". Governed by the category allow-list;
    /// records with an unrecognized kind are dropped before aggregation.
    #[serde(rename = "type")]
    pub category: String,
    /// Administrative district the facility belongs to.
    pub district: String,
    /// User rating. `None` when the source value was absent or not numeric;
    /// such records are excluded from the rating average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(rename = "lng", skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

// ---------------------------------------------------------------------------
// FacilityDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, unfiltered.
#[derive(Debug, Clone, Default)]
pub struct FacilityDataset {
    /// All facilities (rows), in source order.
    pub facilities: Vec<FacilityRecord>,
}

impl FacilityDataset {
    pub fn from_records(facilities: Vec<FacilityRecord>) -> Self {
        FacilityDataset { facilities }
    }

    /// Number of facilities, including ones the allow-list will drop.
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}
