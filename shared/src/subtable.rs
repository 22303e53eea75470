//! Lazy sub-table of an expandable row.
//!
//! The row asks [`SubTableState::wanted`] on every render; a `Some` key means
//! a fetch should start now. Rows are cached per key, so collapsing and
//! re-expanding does not refetch unless the parent id, the applied filter or
//! the list's [`DataVersion`] moved on in between.

use crate::{filter::ActiveFilter, listing::DataVersion};

/// Everything a sub-table fetch depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubTableKey {
    /// Parent record.
    pub parent_id: i64,
    /// Applied filter of the list.
    pub filter: ActiveFilter,
    /// List data version at fetch time.
    pub version: DataVersion,
}

/// Transitions of a [`SubTableState`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubTableEvent<T> {
    /// Expand/collapse affordance clicked.
    Toggle,
    /// Fetch for the key started.
    Started(SubTableKey),
    /// Fetch for the key returned rows.
    Loaded(SubTableKey, Vec<T>),
    /// Fetch for the key failed with display messages.
    Failed(SubTableKey, Vec<String>),
    /// Cached rows are known to be stale (a modal saved a child).
    Invalidate,
}

/// Expansion flag, cached rows and in-flight bookkeeping of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct SubTableState<T> {
    expanded: bool,
    rows: Vec<T>,
    errors: Vec<String>,
    loaded_for: Option<SubTableKey>,
    pending: Option<SubTableKey>,
    pending_is_stale: bool,
}

impl<T> Default for SubTableState<T> {
    fn default() -> Self {
        Self {
            expanded: false,
            rows: Vec::new(),
            errors: Vec::new(),
            loaded_for: None,
            pending: None,
            pending_is_stale: false,
        }
    }
}

impl<T> SubTableState<T> {
    /// Collapsed, nothing cached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the sub-table is shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Cached rows.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Messages of the last failed fetch.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// A fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Key to fetch now, if any. Never while collapsed, never without a
    /// parent id, never while another fetch is in flight.
    pub fn wanted(
        &self,
        parent_id: Option<i64>,
        filter: ActiveFilter,
        version: DataVersion,
    ) -> Option<SubTableKey> {
        if !self.expanded || self.pending.is_some() {
            return None;
        }
        let key = SubTableKey {
            parent_id: parent_id?,
            filter,
            version,
        };
        (self.loaded_for != Some(key)).then_some(key)
    }

    /// Apply one transition.
    pub fn apply(&mut self, event: SubTableEvent<T>) {
        match event {
            SubTableEvent::Toggle => {
                self.expanded = !self.expanded;
                if !self.expanded && !self.errors.is_empty() {
                    // retry on the next expand
                    self.loaded_for = None;
                }
            },
            SubTableEvent::Started(key) => {
                self.pending = Some(key);
                self.pending_is_stale = false;
                self.errors.clear();
            },
            SubTableEvent::Loaded(key, rows) => {
                if self.finish(key) {
                    self.rows = rows;
                }
            },
            SubTableEvent::Failed(key, errors) => {
                if self.finish(key) {
                    self.errors = errors;
                }
            },
            SubTableEvent::Invalidate => {
                self.loaded_for = None;
                if self.pending.is_some() {
                    self.pending_is_stale = true;
                }
            },
        }
    }

    fn finish(&mut self, key: SubTableKey) -> bool {
        if self.pending != Some(key) {
            tracing::debug!(parent_id = key.parent_id, "discarding stale sub-table response");
            return false;
        }
        self.pending = None;
        self.loaded_for = if self.pending_is_stale { None } else { Some(key) };
        self.pending_is_stale = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V0: DataVersion = DataVersion::ZERO;

    fn expanded() -> SubTableState<u32> {
        let mut state = SubTableState::new();
        state.apply(SubTableEvent::Toggle);
        state
    }

    #[test]
    fn collapsed_row_never_fetches() {
        let state = SubTableState::<u32>::new();
        assert_eq!(state.wanted(Some(1), ActiveFilter::Active, V0), None);
    }

    #[test]
    fn expanded_row_without_parent_never_fetches() {
        assert_eq!(expanded().wanted(None, ActiveFilter::Active, V0), None);
    }

    #[test]
    fn expanding_requests_parent_and_filter() {
        let key = expanded().wanted(Some(1), ActiveFilter::Active, V0).expect("fetch on expand");
        assert_eq!(key.parent_id, 1);
        assert_eq!(key.filter, ActiveFilter::Active);
    }

    #[test]
    fn no_second_fetch_while_in_flight() {
        let mut state = expanded();
        let key = state.wanted(Some(1), ActiveFilter::Active, V0).expect("fetch on expand");
        state.apply(SubTableEvent::Started(key));
        assert!(state.is_loading());
        assert_eq!(state.wanted(Some(1), ActiveFilter::Active, V0.bump()), None);
    }

    #[test]
    fn re_expanding_uses_cache_until_version_moves() {
        let mut state = expanded();
        let key = state.wanted(Some(1), ActiveFilter::Active, V0).expect("fetch on expand");
        state.apply(SubTableEvent::Started(key));
        state.apply(SubTableEvent::Loaded(key, vec![10, 11]));
        assert_eq!(state.rows(), &[10, 11]);

        state.apply(SubTableEvent::Toggle);
        assert_eq!(state.rows(), &[10, 11], "collapse keeps cached rows");
        state.apply(SubTableEvent::Toggle);
        assert_eq!(state.wanted(Some(1), ActiveFilter::Active, V0), None);

        assert!(state.wanted(Some(1), ActiveFilter::Active, V0.bump()).is_some());
        assert!(state.wanted(Some(1), ActiveFilter::All, V0).is_some());
    }

    #[test]
    fn response_for_old_key_is_discarded() {
        let mut state = expanded();
        let old = state.wanted(Some(1), ActiveFilter::Active, V0).expect("fetch on expand");
        state.apply(SubTableEvent::Started(old));
        let new = SubTableKey {
            version: V0.bump(),
            ..old
        };
        state.apply(SubTableEvent::Loaded(new, vec![99]));
        assert!(state.rows().is_empty());
        assert!(state.is_loading());
    }

    #[test]
    fn invalidate_forces_refetch_even_mid_flight() {
        let mut state = expanded();
        let key = state.wanted(Some(1), ActiveFilter::Active, V0).expect("fetch on expand");
        state.apply(SubTableEvent::Started(key));
        state.apply(SubTableEvent::Invalidate);
        state.apply(SubTableEvent::Loaded(key, vec![1]));
        assert_eq!(state.wanted(Some(1), ActiveFilter::Active, V0), Some(key));

        state.apply(SubTableEvent::Started(key));
        state.apply(SubTableEvent::Loaded(key, vec![1, 2]));
        assert_eq!(state.wanted(Some(1), ActiveFilter::Active, V0), None);
        state.apply(SubTableEvent::Invalidate);
        assert_eq!(state.wanted(Some(1), ActiveFilter::Active, V0), Some(key));
    }

    #[test]
    fn failure_is_retried_after_collapse_and_expand() {
        let mut state = expanded();
        let key = state.wanted(Some(1), ActiveFilter::Active, V0).expect("fetch on expand");
        state.apply(SubTableEvent::Started(key));
        state.apply(SubTableEvent::Failed(key, vec!["Server error.".into()]));
        assert_eq!(state.errors(), &["Server error.".to_string()]);
        assert_eq!(state.wanted(Some(1), ActiveFilter::Active, V0), None);

        state.apply(SubTableEvent::Toggle);
        state.apply(SubTableEvent::Toggle);
        assert_eq!(state.wanted(Some(1), ActiveFilter::Active, V0), Some(key));
        state.apply(SubTableEvent::Started(key));
        assert!(state.errors().is_empty());
    }
}
