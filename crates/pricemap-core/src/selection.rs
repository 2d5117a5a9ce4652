use crate::store::StoreRecord;

/// The store currently shown in the detail panel, if any.
///
/// Holds the store ID rather than a borrow so the selection can live next to
/// the record set it points into. Never cleared automatically; only
/// [`Selection::dismiss`] empties it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    store_id: Option<String>,
}

impl Selection {
    /// Replaces any previous selection with `record`.
    pub fn select(&mut self, record: &StoreRecord) {
        self.store_id = Some(record.id.clone());
    }

    pub fn dismiss(&mut self) {
        self.store_id = None;
    }

    /// Selected ID without resolving it, for front-ends that persist the
    /// selection across reloads.
    #[must_use]
    pub fn store_id(&self) -> Option<&str> {
        self.store_id.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, record: &StoreRecord) -> bool {
        self.store_id.as_deref() == Some(record.id.as_str())
    }

    /// Resolves the selection against `records`.
    #[must_use]
    pub fn current<'a>(&self, records: &'a [StoreRecord]) -> Option<&'a StoreRecord> {
        let id = self.store_id.as_deref()?;
        records.iter().find(|r| r.id == id)
    }
}
