//! Most-common label over a finite set of strings.

use fra_core::types::collections::FxHashMap;

/// Returns the most frequent label, or `None` for empty input.
///
/// Ties go to the label that occurs first in the input.
pub fn most_common<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let values: Vec<&'a str> = values.into_iter().collect();
    let mut counts: FxHashMap<&'a str, usize> = FxHashMap::default();
    for value in &values {
        *counts.entry(*value).or_insert(0) += 1;
    }

    let mut best: Option<(&'a str, usize)> = None;
    for value in values {
        let count = counts[&value];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
