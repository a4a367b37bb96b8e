//! Option lists for the cascading state → district → village selectors.

use fra_core::types::collections::BTreeSet;
use fra_core::types::{FilterState, LocationRecord};

/// Distinct states, sorted.
pub fn unique_states(locations: &[LocationRecord]) -> Vec<String> {
    sorted_distinct(locations.iter().map(|l| l.state.as_str()))
}

/// Distinct districts of `state`, sorted.
pub fn districts_for_state(locations: &[LocationRecord], state: &str) -> Vec<String> {
    sorted_distinct(
        locations
            .iter()
            .filter(|l| l.state == state)
            .map(|l| l.district.as_str()),
    )
}

/// Every village listed by locations in (`state`, `district`), sorted.
/// Not deduplicated: a village listed by two locations appears twice.
pub fn villages_for_district(
    locations: &[LocationRecord],
    state: &str,
    district: &str,
) -> Vec<String> {
    let mut villages: Vec<String> = locations
        .iter()
        .filter(|l| l.state == state && l.district == district)
        .flat_map(|l| l.villages.iter().cloned())
        .collect();
    villages.sort();
    villages
}

/// Distinct tribal groups across all locations, sorted.
pub fn unique_tribal_groups(locations: &[LocationRecord]) -> Vec<String> {
    sorted_distinct(
        locations
            .iter()
            .flat_map(|l| l.tribal_groups.iter().map(String::as_str)),
    )
}

/// Apply the selector cascade: a district that does not belong to the
/// chosen state clears district and village; a village that does not
/// belong to the chosen district clears the village. Without a state
/// there is no district, and without a district there is no village.
/// The tribal group is left alone.
pub fn normalize_filters(filters: &FilterState, locations: &[LocationRecord]) -> FilterState {
    let mut normalized = filters.clone();

    if normalized.state.is_empty() {
        normalized.district.clear();
        normalized.village.clear();
    } else if !districts_for_state(locations, &normalized.state).contains(&normalized.district) {
        normalized.district.clear();
        normalized.village.clear();
    }

    if normalized.district.is_empty() {
        normalized.village.clear();
    } else if !villages_for_district(locations, &normalized.state, &normalized.district)
        .contains(&normalized.village)
    {
        normalized.village.clear();
    }

    normalized
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
