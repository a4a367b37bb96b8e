//! Malformed-record diagnostics.
//!
//! Aggregation never fails on bad records; it degrades silently. This pass
//! names the records that will degrade a summary so they can be logged once.

use fra_core::types::{ClaimId, ClaimRecord};

/// Claims whose status or geography will be left out of some summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MalformedReport {
    /// Status outside Granted / Pending / Under Review / Rejected (or missing).
    pub unrecognized_status: Vec<(ClaimId, String)>,
    /// Missing or empty state, district, block or village.
    pub missing_geography: Vec<(ClaimId, &'static str)>,
}

impl MalformedReport {
    pub fn is_clean(&self) -> bool {
        self.unrecognized_status.is_empty() && self.missing_geography.is_empty()
    }

    /// Emit one warning per finding.
    pub fn log(&self) {
        for (id, label) in &self.unrecognized_status {
            tracing::warn!(
                claim_id = %id,
                status = %label,
                "claim status not recognized; counted in total only"
            );
        }
        for (id, key) in &self.missing_geography {
            tracing::warn!(
                claim_id = %id,
                key,
                "claim missing geography key; excluded from scoped summaries"
            );
        }
        if !self.is_clean() {
            tracing::warn!(
                unrecognized_status = self.unrecognized_status.len(),
                missing_geography = self.missing_geography.len(),
                "malformed claim records found"
            );
        }
    }
}

/// Scan claims for records that will degrade summaries.
pub fn inspect_claims(claims: &[ClaimRecord]) -> MalformedReport {
    let mut report = MalformedReport::default();
    for claim in claims {
        if !claim.status.is_recognized() {
            report
                .unrecognized_status
                .push((claim.id.clone(), claim.status.label().to_string()));
        }
        let keys = [
            ("state", claim.state()),
            ("district", claim.district()),
            ("block", claim.block()),
            ("village", claim.village()),
        ];
        for (name, value) in keys {
            if value.map_or(true, str::is_empty) {
                report.missing_geography.push((claim.id.clone(), name));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_core::types::ClaimStatus;

    #[test]
    fn test_clean_records() {
        let claims = vec![
            ClaimRecord::new("1", ClaimStatus::Granted)
                .located("Assam", "Golaghat", "Bokakhat", "Kohora"),
        ];
        assert!(inspect_claims(&claims).is_clean());
    }

    #[test]
    fn test_reports_status_and_geography() {
        let mut partial = ClaimRecord::new("2", ClaimStatus::Unrecognized("Approved".into()));
        partial.state = Some("Assam".into());
        partial.district = Some(String::new());
        let report = inspect_claims(&[partial]);
        assert_eq!(report.unrecognized_status.len(), 1);
        assert_eq!(report.unrecognized_status[0].1, "Approved");
        let keys: Vec<&str> = report.missing_geography.iter().map(|(_, k)| *k).collect();
        assert_eq!(keys, vec!["district", "block", "village"]);
        report.log();
    }
}
