//! State of a paginated, filtered list page and the signals it hands to its
//! expandable rows.

use crate::{
    filter::ActiveFilter,
    pagination::{PageRequest, DEFAULT_PAGE_SIZE},
    records::SearchRequest,
};

/// Filter checkboxes and pagination controls of a list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// "Active entries" checkbox.
    pub show_active: bool,
    /// "Inactive entries" checkbox.
    pub show_inactive: bool,
    /// 0-based page index.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            show_active: true,
            show_inactive: false,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    /// Filter derived from the checkboxes.
    pub fn filter(&self) -> ActiveFilter {
        ActiveFilter::from_toggles(self.show_active, self.show_inactive)
    }

    /// At least one checkbox is ticked; refresh is blocked otherwise.
    pub fn has_selection(&self) -> bool {
        self.show_active || self.show_inactive
    }

    /// Search request for the current controls.
    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            pagination: PageRequest::for_page_index(self.page_index, self.page_size),
            active: self.filter(),
        }
    }

    /// Move to another page, same size.
    pub fn go_to_page(&mut self, page_index: usize) -> SearchRequest {
        self.page_index = page_index;
        self.request()
    }

    /// Change rows per page; goes back to the first page.
    pub fn change_page_size(&mut self, page_size: usize) -> SearchRequest {
        self.page_size = page_size.max(1);
        self.page_index = 0;
        self.request()
    }

    /// Update the checkboxes. Returns the first-page request to issue, or
    /// `None` when neither box is ticked.
    pub fn set_toggles(&mut self, show_active: bool, show_inactive: bool) -> Option<SearchRequest> {
        self.show_active = show_active;
        self.show_inactive = show_inactive;
        self.restart()
    }

    /// Back to the first page with the current filter, unless no box is
    /// ticked.
    pub fn restart(&mut self) -> Option<SearchRequest> {
        if !self.has_selection() {
            return None;
        }
        self.page_index = 0;
        Some(self.request())
    }
}

/// Monotonic ticket counter for one fetch site. Only the response holding
/// the latest ticket may update state.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue a ticket for a new request.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `ticket` is still the newest request.
    pub fn is_current(&self, ticket: u64) -> bool {
        if ticket != self.latest {
            tracing::debug!(ticket, latest = self.latest, "discarding stale response");
            return false;
        }
        true
    }
}

/// Search bookkeeping of one list page: which request may still land and
/// which filter produced the rows on screen.
///
/// Only the filter is taken from a landed response. The controls stay
/// whatever the user set last, even when an older request completes.
#[derive(Debug)]
pub struct SearchTracker {
    sequence: RequestSequence,
    applied_filter: ActiveFilter,
}

impl Default for SearchTracker {
    fn default() -> Self {
        Self {
            sequence: RequestSequence::default(),
            applied_filter: ActiveFilter::Active,
        }
    }
}

impl SearchTracker {
    /// Retire every in-flight request and return the ticketed request for
    /// `query`, or `None` when no box is ticked.
    pub fn issue(&mut self, query: &ListQuery) -> Option<(u64, SearchRequest)> {
        let ticket = self.sequence.begin();
        query.has_selection().then(|| (ticket, query.request()))
    }

    /// Whether `ticket` may still update the page.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.sequence.is_current(ticket)
    }

    /// Take a successful response for `request`. Returns `false` when the
    /// ticket is stale and the rows must be dropped.
    pub fn accept(&mut self, ticket: u64, request: &SearchRequest) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.applied_filter = request.active;
        true
    }

    /// Filter of the rows on screen, handed to expandable rows.
    pub fn applied_filter(&self) -> ActiveFilter {
        self.applied_filter
    }
}

/// Counter bumped after every successful mutation on a list page. Rows
/// compare it to decide whether their cached sub-table is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataVersion(u64);

impl DataVersion {
    /// Version before any mutation.
    pub const ZERO: Self = Self(0);

    /// Next version.
    #[must_use]
    pub fn bump(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw counter.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What the delete confirmation dialog is about to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteTarget {
    /// A row of the list itself.
    Record(i64),
    /// A row of some expanded sub-table.
    SubRecord(i64),
}

impl DeleteTarget {
    /// Identifier to delete.
    pub fn id(self) -> i64 {
        match self {
            Self::Record(id) | Self::SubRecord(id) => id,
        }
    }
}

/// State of the delete dialog once the server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Dialog target; `None` closes the dialog.
    pub target: Option<DeleteTarget>,
    /// Messages shown inside the dialog.
    pub messages: Vec<String>,
    /// Whether the list reloads its current page.
    pub refresh: bool,
}

impl DeleteOutcome {
    /// Success closes the dialog and refreshes. Failure keeps the dialog
    /// open on the same target with the messages and leaves the list as is.
    pub fn settle(target: DeleteTarget, result: Result<(), Vec<String>>) -> Self {
        match result {
            Ok(()) => Self {
                target: None,
                messages: Vec::new(),
                refresh: true,
            },
            Err(messages) => Self {
                target: Some(target),
                messages,
                refresh: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_requests_active_first_page_of_ten() {
        let request = ListQuery::default().request();
        assert_eq!(request.pagination, PageRequest {
            page_number: 1,
            page_size: 10,
            need_total_count: true
        });
        assert_eq!(request.active, ActiveFilter::Active);
    }

    #[test]
    fn page_request_tracks_last_controls() {
        let mut query = ListQuery::default();
        let request = query.change_page_size(25);
        assert_eq!((request.pagination.page_number, request.pagination.page_size), (1, 25));

        let request = query.go_to_page(3);
        assert_eq!((request.pagination.page_number, request.pagination.page_size), (4, 25));

        let request = query.change_page_size(100);
        assert_eq!((request.pagination.page_number, request.pagination.page_size), (1, 100));
        assert_eq!(query.page_index, 0);
    }

    #[test]
    fn toggles_restart_from_first_page() {
        let mut query = ListQuery::default();
        query.go_to_page(2);
        let request = query.set_toggles(true, true).expect("a box is ticked");
        assert_eq!(request.active, ActiveFilter::All);
        assert_eq!(request.pagination.page_number, 1);

        let request = query.set_toggles(false, true).expect("a box is ticked");
        assert_eq!(request.active, ActiveFilter::Inactive);
    }

    #[test]
    fn no_selection_blocks_fetching() {
        let mut query = ListQuery::default();
        query.go_to_page(1);
        assert!(query.set_toggles(false, false).is_none());
        assert_eq!(query.filter(), ActiveFilter::All);
        assert!(query.restart().is_none());
        assert_eq!(query.page_index, 1, "blocked restart keeps the page");
    }

    #[test]
    fn applied_filter_follows_completed_requests() {
        let mut tracker = SearchTracker::default();
        let mut query = ListQuery::default();
        query.set_toggles(false, true);
        let (ticket, request) = tracker.issue(&query).expect("a box is ticked");
        assert_eq!(tracker.applied_filter(), ActiveFilter::Active);
        assert!(tracker.accept(ticket, &request));
        assert_eq!(tracker.applied_filter(), ActiveFilter::Inactive);
    }

    #[test]
    fn unticking_both_boxes_retires_in_flight_search() {
        let mut tracker = SearchTracker::default();
        let mut query = ListQuery::default();
        let (ticket, request) = tracker.issue(&query).expect("active box is ticked");

        assert!(query.set_toggles(false, false).is_none());
        assert!(tracker.issue(&query).is_none());

        assert!(!tracker.accept(ticket, &request));
        assert_eq!(tracker.applied_filter(), ActiveFilter::Active);
        assert_eq!((query.show_active, query.show_inactive), (false, false));
    }

    #[test]
    fn newer_search_wins_over_older_response() {
        let mut tracker = SearchTracker::default();
        let mut query = ListQuery::default();
        let (old_ticket, old_request) = tracker.issue(&query).expect("active box is ticked");
        query.set_toggles(false, true);
        let (ticket, request) = tracker.issue(&query).expect("inactive box is ticked");

        assert!(!tracker.accept(old_ticket, &old_request));
        assert!(!tracker.is_current(old_ticket));
        assert!(tracker.accept(ticket, &request));
        assert_eq!(tracker.applied_filter(), ActiveFilter::Inactive);
    }

    #[test]
    fn failed_delete_keeps_dialog_open_without_refresh() {
        let target = DeleteTarget::SubRecord(7);
        let messages = vec!["The record could not be deleted. Please try again later.".to_string()];

        let outcome = DeleteOutcome::settle(target, Err(messages.clone()));

        assert_eq!(outcome.target, Some(target));
        assert_eq!(outcome.messages, messages);
        assert!(!outcome.refresh);
    }

    #[test]
    fn successful_delete_closes_dialog_and_refreshes() {
        let outcome = DeleteOutcome::settle(DeleteTarget::Record(3), Ok(()));
        assert_eq!(outcome.target, None);
        assert!(outcome.messages.is_empty());
        assert!(outcome.refresh);
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut seq = RequestSequence::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn data_version_bumps() {
        let version = DataVersion::default();
        assert_ne!(version.bump(), version);
        assert_eq!(version.bump().get(), 1);
    }
}
