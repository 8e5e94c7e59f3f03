use std::collections::BTreeSet;

use super::model::FacilityRecord;

// ---------------------------------------------------------------------------
// Category allow-list
// ---------------------------------------------------------------------------

/// The set of facility categories that participate in aggregation and
/// display. Records outside it are dropped entirely and appear in no
/// statistic, chart, or table row.
pub type AllowedCategories = BTreeSet<String>;

/// The six facility kinds the dashboard knows how to present.
pub fn default_allowed() -> AllowedCategories {
    [
        "Hospital",
        "Health Center",
        "School",
        "Police Station",
        "University",
        "Clinic",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Keep only records whose category is in the allow-list, preserving input
/// order. A missing or unrecognized category is simply not a member, so the
/// record is dropped silently, never an error.
pub fn filter_records(records: &[FacilityRecord], allowed: &AllowedCategories) -> Vec<FacilityRecord> {
    records
        .iter()
        .filter(|f| allowed.contains(f.category.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(category: &str, district: &str) -> FacilityRecord {
        FacilityRecord {
            name: format!("{category} {district}"),
            category: category.to_string(),
            district: district.to_string(),
            rating: None,
            lat: None,
            lon: None,
            address: None,
        }
    }

    #[test]
    fn drops_unrecognized_categories() {
        let records = vec![rec("Hospital", "A"), rec("Bakery", "B"), rec("School", "A")];
        let kept = filter_records(&records, &default_allowed());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].category, "Hospital");
        assert_eq!(kept[1].category, "School");
    }

    #[test]
    fn preserves_input_order() {
        let records = vec![rec("Clinic", "B"), rec("Hospital", "A"), rec("Clinic", "A")];
        let kept = filter_records(&records, &default_allowed());
        assert_eq!(kept, records);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![rec("Hospital", "A"), rec("Market", "B"), rec("Clinic", "C")];
        let allowed = default_allowed();
        let once = filter_records(&records, &allowed);
        let twice = filter_records(&once, &allowed);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_records(&[], &default_allowed()).is_empty());
    }

    #[test]
    fn empty_category_is_dropped() {
        let records = vec![rec("", "A")];
        assert!(filter_records(&records, &default_allowed()).is_empty());
    }
}
