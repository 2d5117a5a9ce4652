//! User-chosen constraints applied to the record set.

use rust_decimal::Decimal;

use crate::range::{drag_value, RangeHandle};
use crate::store::{PriceBounds, StoreRecord};

/// Ordering applied by the sort stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Next state of the sort button: unsorted and descending go to
    /// ascending, ascending goes to descending.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Unsorted | SortOrder::Descending => SortOrder::Ascending,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Unsorted => "Sort by Price",
            SortOrder::Ascending => "Price: Low to High",
            SortOrder::Descending => "Price: High to Low",
        }
    }
}

/// Current filter and sort settings for one session.
///
/// `min_price <= max_price` holds after every mutation: the setters clamp
/// against the opposite bound instead of rejecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    min_price: Decimal,
    max_price: Decimal,
    /// Exact state name; empty means every state.
    pub state_filter: String,
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    /// Criteria that admit every priced record within `bounds`.
    ///
    /// With no bounds (empty dataset or nothing parseable) the range collapses
    /// to `[0, 0]`.
    #[must_use]
    pub fn new(bounds: Option<PriceBounds>) -> Self {
        let (min_price, max_price) = bounds.map_or((Decimal::ZERO, Decimal::ZERO), |b| (b.min, b.max));
        Self {
            search_text: String::new(),
            min_price,
            max_price,
            state_filter: String::new(),
            sort_order: SortOrder::Unsorted,
        }
    }

    #[must_use]
    pub fn for_records(records: &[StoreRecord]) -> Self {
        Self::new(PriceBounds::from_records(records))
    }

    #[must_use]
    pub fn min_price(&self) -> Decimal {
        self.min_price
    }

    #[must_use]
    pub fn max_price(&self) -> Decimal {
        self.max_price
    }

    /// Sets the lower bound, clamped to the current upper bound.
    pub fn set_min_price(&mut self, value: Decimal) {
        self.min_price = value.min(self.max_price);
    }

    /// Sets the upper bound, clamped to the current lower bound.
    pub fn set_max_price(&mut self, value: Decimal) {
        self.max_price = value.max(self.min_price);
    }

    /// Sets both bounds at once, ignoring the current range. The arguments
    /// are ordered so `min_price <= max_price` still holds.
    pub fn set_range(&mut self, lo: Decimal, hi: Decimal) {
        self.min_price = lo.min(hi);
        self.max_price = lo.max(hi);
    }

    /// Moves one slider handle to `fraction` of the dataset range. Interactive
    /// front-ends call this on pointer moves; the CLI sets prices directly.
    pub fn drag(&mut self, handle: RangeHandle, fraction: f64, bounds: PriceBounds) {
        let value = drag_value(bounds, fraction);
        match handle {
            RangeHandle::Min => self.set_min_price(value),
            RangeHandle::Max => self.set_max_price(value),
        }
    }

    /// One press of the sort button in an interactive front-end.
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Returns `true` when `record` satisfies the search, price and state clauses.
    #[must_use]
    pub fn matches(&self, record: &StoreRecord) -> bool {
        self.matches_search(record) && self.matches_price(record) && self.matches_state(record)
    }

    fn matches_search(&self, record: &StoreRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record.name.to_lowercase().contains(&needle) || record.city.to_lowercase().contains(&needle)
    }

    /// Records without a parseable price never satisfy the price clause.
    fn matches_price(&self, record: &StoreRecord) -> bool {
        record
            .parsed_price()
            .is_some_and(|p| p >= self.min_price && p <= self.max_price)
    }

    fn matches_state(&self, record: &StoreRecord) -> bool {
        self.state_filter.is_empty() || record.state_name == self.state_filter
    }
}
