use std::collections::BTreeSet;

use super::model::FacilityRecord;

// ---------------------------------------------------------------------------
// Summary – the four card metrics
// ---------------------------------------------------------------------------

/// Headline metrics for the summary cards. Computed strictly from the
/// filtered dataset; `avg_rating` keeps full precision, rounding for
/// display belongs to the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub districts: usize,
    pub categories: usize,
    /// Mean of the numeric ratings. Exactly `0.0` when none exist, not NaN.
    pub avg_rating: f64,
}

pub fn summarize(records: &[FacilityRecord]) -> Summary {
    let districts: BTreeSet<&str> = records.iter().map(|f| f.district.as_str()).collect();
    let categories: BTreeSet<&str> = records.iter().map(|f| f.category.as_str()).collect();

    // Absent ratings are excluded from numerator and denominator alike.
    let ratings: Vec<f64> = records.iter().filter_map(|f| f.rating).collect();
    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    };

    Summary {
        total: records.len(),
        districts: districts.len(),
        categories: categories.len(),
        avg_rating,
    }
}

// ---------------------------------------------------------------------------
// Histograms
// ---------------------------------------------------------------------------

/// Count records per category, emitted in the fixed display order given by
/// `order` (the chart's color table is keyed by position in that order).
/// Categories with no occurrences are omitted, never emitted as zero.
/// `order` is expected to cover the allow-list used for filtering.
pub fn category_histogram(records: &[FacilityRecord], order: &[String]) -> Vec<(String, usize)> {
    order
        .iter()
        .filter_map(|cat| {
            let n = records.iter().filter(|f| &f.category == cat).count();
            (n > 0).then(|| (cat.clone(), n))
        })
        .collect()
}

/// Count records per district, in discovery order: the first district seen
/// while scanning the filtered sequence comes first. Not alphabetical, not
/// by count.
pub fn district_histogram(records: &[FacilityRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for f in records {
        match counts.iter_mut().find(|(d, _)| d == &f.district) {
            Some((_, n)) => *n += 1,
            None => counts.push((f.district.clone(), 1)),
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Cross-tabulation – category × district grid
// ---------------------------------------------------------------------------

/// Category × district count matrix. Both axes are in discovery order, and
/// the grid is complete: zero cells are retained, since the comparison
/// chart consumes this as a full matrix of grouped series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossTab {
    pub categories: Vec<String>,
    pub districts: Vec<String>,
    /// `counts[c][d]` is the number of records with `categories[c]` in
    /// `districts[d]`.
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    /// Sum over the whole grid; equals the filtered record count.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|row| row.iter().sum::<usize>()).sum()
    }
}

pub fn cross_tab(records: &[FacilityRecord]) -> CrossTab {
    let categories = distinct_in_order(records.iter().map(|f| f.category.as_str()));
    let districts = distinct_in_order(records.iter().map(|f| f.district.as_str()));

    let counts = categories
        .iter()
        .map(|c| {
            districts
                .iter()
                .map(|d| {
                    records
                        .iter()
                        .filter(|f| &f.category == c && &f.district == d)
                        .count()
                })
                .collect()
        })
        .collect();

    CrossTab {
        categories,
        districts,
        counts,
    }
}

/// Distinct values in first-seen order.
fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|seen| seen == v) {
            out.push(v.to_string());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Table rows
// ---------------------------------------------------------------------------

/// One table row per filtered record, holding exactly the table's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityRow {
    pub name: String,
    pub category: String,
    pub district: String,
    pub rating: Option<f64>,
    pub address: String,
}

/// 1:1 order-preserving mapping from filtered records to table rows. No
/// drops, no duplication, no computation beyond shaping.
pub fn table_rows(records: &[FacilityRecord]) -> Vec<FacilityRow> {
    records
        .iter()
        .map(|f| FacilityRow {
            name: f.name.clone(),
            category: f.category.clone(),
            district: f.district.clone(),
            rating: f.rating,
            address: f.address.clone().unwrap_or_default(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Dashboard – everything derived from one dataset load
// ---------------------------------------------------------------------------

/// All derived views for one dataset load, rebuilt from scratch each time.
/// The four computations are independent pure functions over the same
/// filtered input; none reads another's output.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub summary: Summary,
    pub by_category: Vec<(String, usize)>,
    pub by_district: Vec<(String, usize)>,
    pub comparison: CrossTab,
    pub rows: Vec<FacilityRow>,
}

/// Pipeline entry point: records must already be filtered through the
/// category allow-list. `category_order` is the fixed display order for the
/// category chart, supplied as explicit configuration.
pub fn build_dashboard(records: &[FacilityRecord], category_order: &[String]) -> Dashboard {
    Dashboard {
        summary: summarize(records),
        by_category: category_histogram(records, category_order),
        by_district: district_histogram(records),
        comparison: cross_tab(records),
        rows: table_rows(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{default_allowed, filter_records};

    fn rec(name: &str, category: &str, district: &str, rating: Option<f64>) -> FacilityRecord {
        FacilityRecord {
            name: name.to_string(),
            category: category.to_string(),
            district: district.to_string(),
            rating,
            lat: None,
            lon: None,
            address: None,
        }
    }

    fn fixed_order() -> Vec<String> {
        [
            "Hospital",
            "Health Center",
            "Clinic",
            "School",
            "Police Station",
            "University",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn reference_example() {
        // Bakery is dropped by the allow-list; the missing rating is
        // excluded from the average.
        let raw = vec![
            rec("h", "Hospital", "A", Some(4.0)),
            rec("s", "School", "A", None),
            rec("b", "Bakery", "B", Some(5.0)),
        ];
        let records = filter_records(&raw, &default_allowed());

        let summary = summarize(&records);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.districts, 1);
        assert_eq!(summary.categories, 2);
        assert_eq!(summary.avg_rating, 4.0);

        let by_category = category_histogram(&records, &fixed_order());
        assert_eq!(
            by_category,
            vec![("Hospital".to_string(), 1), ("School".to_string(), 1)]
        );

        assert_eq!(district_histogram(&records), vec![("A".to_string(), 2)]);

        let ct = cross_tab(&records);
        assert_eq!(ct.categories, vec!["Hospital", "School"]);
        assert_eq!(ct.districts, vec!["A"]);
        assert_eq!(ct.counts, vec![vec![1], vec![1]]);
    }

    #[test]
    fn category_histogram_uses_fixed_order_and_omits_zeros() {
        let records = vec![
            rec("u", "University", "A", None),
            rec("h", "Hospital", "B", None),
            rec("c", "Clinic", "A", None),
            rec("h2", "Hospital", "A", None),
        ];
        // Hospital before Clinic before University, regardless of scan
        // order; School / Health Center / Police Station absent, not zero.
        assert_eq!(
            category_histogram(&records, &fixed_order()),
            vec![
                ("Hospital".to_string(), 2),
                ("Clinic".to_string(), 1),
                ("University".to_string(), 1),
            ]
        );
    }

    #[test]
    fn district_histogram_uses_discovery_order() {
        let records = vec![
            rec("a", "Hospital", "Wakiso", None),
            rec("b", "Clinic", "Kampala", None),
            rec("c", "School", "Wakiso", None),
            rec("d", "Clinic", "Mukono", None),
        ];
        assert_eq!(
            district_histogram(&records),
            vec![
                ("Wakiso".to_string(), 2),
                ("Kampala".to_string(), 1),
                ("Mukono".to_string(), 1),
            ]
        );
    }

    #[test]
    fn cross_tab_keeps_zero_cells() {
        let records = vec![
            rec("a", "Hospital", "A", None),
            rec("b", "School", "B", None),
        ];
        let ct = cross_tab(&records);
        assert_eq!(ct.categories, vec!["Hospital", "School"]);
        assert_eq!(ct.districts, vec!["A", "B"]);
        // Full grid: (Hospital, B) and (School, A) are present as zeros.
        assert_eq!(ct.counts, vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn totals_agree_across_outputs() {
        let records = vec![
            rec("a", "Hospital", "A", Some(3.0)),
            rec("b", "Hospital", "B", None),
            rec("c", "Clinic", "A", Some(5.0)),
            rec("d", "School", "C", None),
            rec("e", "School", "A", Some(4.0)),
        ];
        let summary = summarize(&records);
        let by_category = category_histogram(&records, &fixed_order());
        let ct = cross_tab(&records);

        assert_eq!(summary.total, records.len());
        assert_eq!(by_category.iter().map(|(_, n)| n).sum::<usize>(), summary.total);
        assert_eq!(ct.total(), summary.total);
        assert_eq!(by_category.len(), summary.categories);
        assert_eq!(ct.categories.len(), summary.categories);
    }

    #[test]
    fn avg_rating_is_zero_without_ratings() {
        let records = vec![
            rec("a", "Hospital", "A", None),
            rec("b", "Clinic", "B", None),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.avg_rating, 0.0);
        assert!(!summary.avg_rating.is_nan());
    }

    #[test]
    fn empty_input_yields_empty_outputs() {
        let dash = build_dashboard(&[], &fixed_order());
        assert_eq!(dash.summary, Summary::default());
        assert!(dash.by_category.is_empty());
        assert!(dash.by_district.is_empty());
        assert_eq!(dash.comparison, CrossTab::default());
        assert!(dash.rows.is_empty());
    }

    #[test]
    fn unrecognized_category_never_changes_aggregates() {
        let raw = vec![
            rec("a", "Hospital", "A", Some(4.0)),
            rec("b", "School", "B", Some(2.0)),
        ];
        let mut with_extra = raw.clone();
        with_extra.insert(1, rec("x", "Petrol Station", "C", Some(1.0)));

        let allowed = default_allowed();
        let base = build_dashboard(&filter_records(&raw, &allowed), &fixed_order());
        let extra = build_dashboard(&filter_records(&with_extra, &allowed), &fixed_order());

        assert_eq!(base.summary, extra.summary);
        assert_eq!(base.by_category, extra.by_category);
        assert_eq!(base.by_district, extra.by_district);
        assert_eq!(base.comparison, extra.comparison);
        assert_eq!(base.rows, extra.rows);
    }

    #[test]
    fn table_rows_map_one_to_one_in_order() {
        let records = vec![
            rec("Mulago Hospital", "Hospital", "Kampala", Some(4.5)),
            rec("Kira Primary", "School", "Wakiso", None),
        ];
        let rows = table_rows(&records);
        assert_eq!(rows.len(), records.len());
        assert_eq!(rows[0].name, "Mulago Hospital");
        assert_eq!(rows[0].rating, Some(4.5));
        assert_eq!(rows[1].name, "Kira Primary");
        assert_eq!(rows[1].rating, None);
        assert_eq!(rows[1].address, "");
    }
}
