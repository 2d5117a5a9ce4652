//! Session controller: the single owner of per-run viewer state.
//!
//! Load state, filter criteria, selection and view mode all live here and are
//! handed explicitly to the pipeline and color mapper.

use crate::color::{color_for_price, Rgb};
use crate::filter::FilterCriteria;
use crate::maps::map_search_url;
use crate::pipeline::{derive_view, state_options, ViewSummary};
use crate::selection::Selection;
use crate::store::{PriceBounds, StoreRecord};

/// Outcome of the one-shot feed fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(Vec<StoreRecord>),
    /// Human-readable failure message; never empty.
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            LoadState::Pending | LoadState::Ready(_) => None,
        }
    }
}

/// How the derived view is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Default)]
pub struct Session {
    load: LoadState,
    bounds: Option<PriceBounds>,
    criteria: Option<FilterCriteria>,
    selection: Selection,
    view_mode: ViewMode,
}

impl Session {
    /// A session waiting on its feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the loader's result. On `Ready`, computes dataset bounds and
    /// resets the criteria to span them.
    pub fn apply_load(&mut self, load: LoadState) {
        match &load {
            LoadState::Ready(records) => {
                let bounds = PriceBounds::from_records(records);
                let unpriced = records.iter().filter(|r| r.parsed_price().is_none()).count();
                if unpriced > 0 {
                    tracing::warn!(
                        count = unpriced,
                        "store records without a parseable price are hidden from the view"
                    );
                }
                tracing::debug!(records = records.len(), ?bounds, "session ready");
                self.bounds = bounds;
                self.criteria = Some(FilterCriteria::new(bounds));
            }
            LoadState::Failed(message) => {
                tracing::debug!(%message, "session failed");
                self.bounds = None;
                self.criteria = None;
            }
            LoadState::Pending => {
                self.bounds = None;
                self.criteria = None;
            }
        }
        self.load = load;
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// The loaded records; empty until the feed is ready.
    #[must_use]
    pub fn records(&self) -> &[StoreRecord] {
        match &self.load {
            LoadState::Ready(records) => records,
            LoadState::Pending | LoadState::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Option<PriceBounds> {
        self.bounds
    }

    #[must_use]
    pub fn criteria(&self) -> Option<&FilterCriteria> {
        self.criteria.as_ref()
    }

    /// Mutable criteria; `None` until the feed is ready.
    pub fn criteria_mut(&mut self) -> Option<&mut FilterCriteria> {
        self.criteria.as_mut()
    }

    /// The derived view for the current criteria.
    #[must_use]
    pub fn view(&self) -> Vec<&StoreRecord> {
        match &self.criteria {
            Some(criteria) => derive_view(self.records(), criteria),
            None => Vec::new(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> ViewSummary {
        ViewSummary {
            shown: self.view().len(),
            total: self.records().len(),
        }
    }

    #[must_use]
    pub fn state_options(&self) -> Vec<String> {
        state_options(self.records())
    }

    /// Swatch color for `record`, or `None` when its price does not parse.
    #[must_use]
    pub fn color_for(&self, record: &StoreRecord) -> Option<Rgb> {
        let bounds = self.bounds?;
        record.parsed_price().map(|p| color_for_price(p, bounds))
    }

    /// Selects the store with `store_id`. Returns `false` and leaves the
    /// selection untouched when no loaded record has that ID.
    pub fn select(&mut self, store_id: &str) -> bool {
        let LoadState::Ready(records) = &self.load else {
            return false;
        };
        match records.iter().find(|r| r.id == store_id) {
            Some(record) => {
                self.selection.select(record);
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn selected(&self) -> Option<&StoreRecord> {
        self.selection.current(self.records())
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Map search link for the selected store.
    #[must_use]
    pub fn selected_map_url(&self, map_search_base: &str) -> Option<String> {
        self.selected().map(|r| map_search_url(map_search_base, r))
    }
}
