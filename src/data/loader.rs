use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{FacilityDataset, FacilityRecord};

/// Structural problems the loader refuses to guess around. Everything
/// field-level degrades gracefully instead (missing rating, odd types).
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("expected a top-level JSON array of facility records")]
    NotAnArray,
    #[error("CSV missing required '{0}' column")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a facility dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "name": ..., "type": ..., "district": ..., "rating": ... }, ...]`
/// * `.csv`  – header row with `name`, `type`, `district`, `rating`, … columns
pub fn load_file(path: &Path) -> Result<FacilityDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            parse_csv(file)
        }
        other => Err(FormatError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "name": "Mulago Hospital",
///     "type": "Hospital",
///     "district": "Kampala",
///     "rating": 4.2,
///     "lat": 0.3386, "lng": 32.5765,
///     "address": "Upper Mulago Hill Rd"
///   },
///   ...
/// ]
/// ```
///
/// `category` is accepted as an alias for `type`. Any other key is ignored.
/// A non-number `rating` becomes `None` rather than an error.
pub fn parse_json(text: &str) -> Result<FacilityDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root.as_array().ok_or(FormatError::NotAnArray)?;

    let mut facilities = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        facilities.push(FacilityRecord {
            name: string_field(obj, "name"),
            category: obj
                .get("type")
                .or_else(|| obj.get("category"))
                .and_then(JsonValue::as_str)
                .unwrap_or_default()
                .to_string(),
            district: string_field(obj, "district"),
            rating: obj.get("rating").and_then(JsonValue::as_f64),
            lat: obj.get("lat").and_then(JsonValue::as_f64),
            lon: obj
                .get("lng")
                .or_else(|| obj.get("lon"))
                .and_then(JsonValue::as_f64),
            address: obj
                .get("address")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
        });
    }

    Ok(FacilityDataset::from_records(facilities))
}

fn string_field(obj: &serde_json::Map<String, JsonValue>, key: &str) -> String {
    obj.get(key)
        .and_then(JsonValue::as_str)
        .unwrap_or_default()
        .to_string()
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. `type` and `district` are
/// required headers; `name`, `rating`, `lat`, `lng`, `address` are optional.
/// Empty or unparseable rating cells become `None`.
pub fn parse_csv<R: Read>(input: R) -> Result<FacilityDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = |name: &str| headers.iter().position(|h| h == name);

    let type_idx = col("type")
        .or_else(|| col("category"))
        .ok_or(FormatError::MissingColumn("type"))?;
    let district_idx = col("district").ok_or(FormatError::MissingColumn("district"))?;
    let name_idx = col("name");
    let rating_idx = col("rating");
    let lat_idx = col("lat");
    let lon_idx = col("lng").or_else(|| col("lon"));
    let address_idx = col("address");

    let cell = |record: &csv::StringRecord, idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| record.get(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let mut facilities = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        facilities.push(FacilityRecord {
            name: cell(&record, name_idx).unwrap_or_default(),
            category: record.get(type_idx).unwrap_or_default().to_string(),
            district: record.get(district_idx).unwrap_or_default().to_string(),
            rating: cell(&record, rating_idx).and_then(|s| s.trim().parse().ok()),
            lat: cell(&record, lat_idx).and_then(|s| s.trim().parse().ok()),
            lon: cell(&record, lon_idx).and_then(|s| s.trim().parse().ok()),
            address: cell(&record, address_idx),
        });
    }

    Ok(FacilityDataset::from_records(facilities))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_records_load_with_field_aliases() {
        let text = r#"[
            {"name": "Mulago Hospital", "type": "Hospital", "district": "Kampala",
             "rating": 4.2, "lat": 0.3386, "lng": 32.5765, "address": "Mulago Hill Rd"},
            {"name": "Kira Primary", "category": "School", "district": "Wakiso"}
        ]"#;
        let ds = parse_json(text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.facilities[0].category, "Hospital");
        assert_eq!(ds.facilities[0].rating, Some(4.2));
        assert_eq!(ds.facilities[0].address.as_deref(), Some("Mulago Hill Rd"));
        assert_eq!(ds.facilities[1].category, "School");
        assert_eq!(ds.facilities[1].rating, None);
    }

    #[test]
    fn non_numeric_rating_degrades_to_none() {
        let text = r#"[
            {"name": "a", "type": "Clinic", "district": "A", "rating": "good"},
            {"name": "b", "type": "Clinic", "district": "A", "rating": null}
        ]"#;
        let ds = parse_json(text).unwrap();
        assert_eq!(ds.facilities[0].rating, None);
        assert_eq!(ds.facilities[1].rating, None);
    }

    #[test]
    fn missing_type_yields_empty_category() {
        // The allow-list drops these downstream; loading never errors here.
        let ds = parse_json(r#"[{"name": "x", "district": "A"}]"#).unwrap();
        assert_eq!(ds.facilities[0].category, "");
    }

    #[test]
    fn non_array_root_is_an_error() {
        assert!(parse_json(r#"{"facilities": []}"#).is_err());
    }

    #[test]
    fn csv_rows_load_with_lenient_ratings() {
        let csv = "\
name,type,district,rating,address
Mulago Hospital,Hospital,Kampala,4.2,Mulago Hill Rd
Kira Primary,School,Wakiso,,
Corner Shop,Kiosk,Kampala,n/a,";
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.facilities[0].rating, Some(4.2));
        assert_eq!(ds.facilities[1].rating, None);
        assert_eq!(ds.facilities[2].rating, None);
        assert_eq!(ds.facilities[1].address, None);
    }

    #[test]
    fn csv_without_type_column_is_an_error() {
        let csv = "name,district\nSomething,Kampala";
        assert!(parse_csv(csv.as_bytes()).is_err());
    }
}
