//! Facet filtering over location records.
//!
//! Each non-empty facet narrows the result; all facets compose as AND.
//! District does not require state. Village and tribal group are list
//! membership tests on exact elements, not substring matches.

use fra_core::tracing::metrics;
use fra_core::types::{FilterState, LocationRecord};

/// Borrowed view of the four facets, with empty strings already dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationFilter<'f> {
    pub state: Option<&'f str>,
    pub district: Option<&'f str>,
    pub village: Option<&'f str>,
    pub tribal_group: Option<&'f str>,
}

impl<'f> LocationFilter<'f> {
    pub fn from_state(filters: &'f FilterState) -> Self {
        Self {
            state: non_empty(&filters.state),
            district: non_empty(&filters.district),
            village: non_empty(&filters.village),
            tribal_group: non_empty(&filters.tribal_group),
        }
    }

    pub fn matches(&self, location: &LocationRecord) -> bool {
        self.state.map_or(true, |s| location.state == s)
            && self.district.map_or(true, |d| location.district == d)
            && self.village.map_or(true, |v| location.has_village(v))
            && self
                .tribal_group
                .map_or(true, |g| location.has_tribal_group(g))
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Locations matching every non-empty facet, in input order.
///
/// Always returns a fresh vector; the input is never modified.
pub fn filter_locations(
    locations: &[LocationRecord],
    filters: &FilterState,
) -> Vec<LocationRecord> {
    let span = tracing::debug_span!("filter_locations", locations_matched = tracing::field::Empty);
    let _guard = span.enter();

    let facets = LocationFilter::from_state(filters);
    let matched: Vec<LocationRecord> = locations
        .iter()
        .filter(|loc| facets.matches(loc))
        .cloned()
        .collect();

    span.record(metrics::LOCATIONS_MATCHED, matched.len());
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> Vec<LocationRecord> {
        vec![
            LocationRecord::new("kaziranga", "Assam", "Golaghat")
                .with_villages(&["Kohora", "Bagori"])
                .with_tribal_groups(&["Mishing", "Karbi"]),
            LocationRecord::new("kohora-east", "Assam", "Golaghat")
                .with_villages(&["Kohora East"])
                .with_tribal_groups(&["Karbi"]),
            LocationRecord::new("simlipal", "Odisha", "Mayurbhanj")
                .with_villages(&["Gudugudia"])
                .with_tribal_groups(&["Santhal", "Kolha"]),
            LocationRecord::new("golaghat-odisha", "Odisha", "Golaghat"),
        ]
    }

    fn ids(locations: &[LocationRecord]) -> Vec<&str> {
        locations.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_equal_copy() {
        let locations = fixtures();
        let result = filter_locations(&locations, &FilterState::default());
        assert_eq!(result, locations);
    }

    #[test]
    fn test_village_is_exact_membership() {
        let locations = fixtures();
        let filters = FilterState {
            village: "Kohora".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_locations(&locations, &filters)), vec!["kaziranga"]);
    }

    #[test]
    fn test_district_independent_of_state() {
        let locations = fixtures();
        let filters = FilterState {
            district: "Golaghat".into(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_locations(&locations, &filters)),
            vec!["kaziranga", "kohora-east", "golaghat-odisha"]
        );
    }

    #[test]
    fn test_tribal_group_ands_with_geography() {
        let locations = fixtures();
        let filters = FilterState {
            state: "Assam".into(),
            tribal_group: "Karbi".into(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_locations(&locations, &filters)),
            vec!["kaziranga", "kohora-east"]
        );

        let filters = FilterState {
            state: "Odisha".into(),
            tribal_group: "Karbi".into(),
            ..Default::default()
        };
        assert!(filter_locations(&locations, &filters).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let locations = fixtures();
        let before = locations.clone();
        let filters = FilterState {
            state: "Odisha".into(),
            ..Default::default()
        };
        let _ = filter_locations(&locations, &filters);
        assert_eq!(locations, before);
    }

    #[test]
    fn test_location_filter_is_empty() {
        assert!(LocationFilter::from_state(&FilterState::default()).is_empty());
    }
}
