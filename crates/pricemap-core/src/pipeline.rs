//! The derived view: filter, then sort, the loaded record set.
//!
//! Everything here is a pure function of `(records, criteria)` and is cheap
//! enough to recompute after every criteria change.

use std::collections::BTreeSet;

use crate::filter::{FilterCriteria, SortOrder};
use crate::store::StoreRecord;

/// Records that satisfy `criteria`, ordered by its sort order.
///
/// Unsorted keeps feed order. Sorted output is stable, so equal prices keep
/// their feed order too.
#[must_use]
pub fn derive_view<'a>(records: &'a [StoreRecord], criteria: &FilterCriteria) -> Vec<&'a StoreRecord> {
    let mut view: Vec<&StoreRecord> = records.iter().filter(|r| criteria.matches(r)).collect();

    // Every record past the filter has a parseable price.
    match criteria.sort_order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => view.sort_by_key(|r| r.parsed_price()),
        SortOrder::Descending => view.sort_by(|a, b| b.parsed_price().cmp(&a.parsed_price())),
    }
    view
}

/// Distinct, non-empty state names in ascending order, for the state selector.
#[must_use]
pub fn state_options(records: &[StoreRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.state_name.as_str())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Counts behind the "Showing N of M locations" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSummary {
    pub shown: usize,
    pub total: usize,
}

impl std::fmt::Display for ViewSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} of {} locations", self.shown, self.total)
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
