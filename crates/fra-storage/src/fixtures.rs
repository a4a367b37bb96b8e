//! JSON fixture parsing.
//!
//! Both fixtures are a top-level object holding one collection array. The
//! collection key must be present; each element is decoded on its own so a
//! bad record is reported with its index.

use std::path::Path;

use fra_core::errors::DataError;
use fra_core::types::{ClaimRecord, LocationRecord, RegionSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CLAIMS_KEY: &str = "claims";
const LOCATIONS_KEY: &str = "locations";
const SUMMARY_KEY: &str = "progressSummary";

/// Contents of the claims fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDataset {
    pub claims: Vec<ClaimRecord>,
    #[serde(default)]
    pub progress_summary: SummaryTables,
}

/// Precomputed per-state and per-district summaries shipped with the claims.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryTables {
    pub by_state: Vec<RegionSummary>,
    pub by_district: Vec<RegionSummary>,
}

/// Contents of the locations fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationDataset {
    pub locations: Vec<LocationRecord>,
}

/// Parse the claims fixture at `path`.
pub fn load_claims(path: &Path) -> Result<ClaimDataset, DataError> {
    let mut root = read_object(path)?;
    let claims = decode_collection(path, &mut root, CLAIMS_KEY)?;
    let progress_summary = match root.remove(SUMMARY_KEY) {
        Some(value) => serde_json::from_value(value).map_err(|e| DataError::Parse {
            path: path.to_path_buf(),
            message: format!("{SUMMARY_KEY}: {e}"),
        })?,
        None => SummaryTables::default(),
    };
    tracing::debug!(path = %path.display(), claims = claims.len(), "loaded claims fixture");
    Ok(ClaimDataset {
        claims,
        progress_summary,
    })
}

/// Parse the locations fixture at `path`.
pub fn load_locations(path: &Path) -> Result<LocationDataset, DataError> {
    let mut root = read_object(path)?;
    let locations = decode_collection(path, &mut root, LOCATIONS_KEY)?;
    tracing::debug!(
        path = %path.display(),
        locations = locations.len(),
        "loaded locations fixture"
    );
    Ok(LocationDataset { locations })
}

fn read_object(path: &Path) -> Result<Map<String, Value>, DataError> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DataError::Parse {
            path: path.to_path_buf(),
            message: "top-level value is not an object".to_string(),
        }),
        Err(e) => Err(DataError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

fn decode_collection<T: DeserializeOwned>(
    path: &Path,
    root: &mut Map<String, Value>,
    key: &'static str,
) -> Result<Vec<T>, DataError> {
    let items = match root.remove(key) {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(DataError::MissingCollection {
                path: path.to_path_buf(),
                key,
            })
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| DataError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use fra_core::errors::FraErrorCode;
    use fra_core::types::{ClaimStatus, RightsType};

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_claims_without_summary() {
        let file = write_temp(r#"{"claims":[{"id":"c1","status":"Granted","state":"Assam"}]}"#);
        let dataset = load_claims(file.path()).unwrap();
        assert_eq!(dataset.claims.len(), 1);
        assert_eq!(dataset.claims[0].status, ClaimStatus::Granted);
        assert!(dataset.progress_summary.by_state.is_empty());
    }

    #[test]
    fn test_cosmetic_damage_still_loads_and_counts() {
        let file = write_temp(
            r#"{"claims":[
                {"id":"c1","type":"IFR","status":"Granted","households":4},
                {"id":"c2","type":"Community","status":"Pending","households":3,
                 "titleIssued":null,"boundary":null}
            ]}"#,
        );
        let dataset = load_claims(file.path()).unwrap();
        assert_eq!(dataset.claims.len(), 2);

        let damaged = &dataset.claims[1];
        assert_eq!(damaged.rights_type, Some(RightsType::Other));
        assert!(!damaged.title_issued);
        assert!(damaged.boundary.is_empty());

        let summary = fra_analysis::aggregate(&dataset.claims);
        assert_eq!(summary.total_claims, 2);
        assert_eq!(summary.pending_claims, 1);
        assert_eq!(summary.households, 7);
        assert_eq!(summary.coverage, 50);
    }

    #[test]
    fn test_missing_collection() {
        let file = write_temp(r#"{"records":[]}"#);
        let err = load_claims(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MissingCollection { key: "claims", .. }));
        assert_eq!(err.error_code(), "DATA_SCHEMA_ERROR");
    }

    #[test]
    fn test_invalid_record_reports_index() {
        let file = write_temp(r#"{"locations":[{"id":"a"}, 7]}"#);
        let err = load_locations(file.path()).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_temp("{ not json");
        let err = load_locations(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "DATA_PARSE_ERROR");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_claims(Path::new("/nonexistent/claims.json")).unwrap_err();
        assert_eq!(err.error_code(), "DATA_IO_ERROR");
    }
}
