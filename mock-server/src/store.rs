//! In-memory record tables behind the mock API.
//!
//! Each resource keeps its top-level rows and their versions in one table;
//! a version points at its parent through `parent`. Deletes are logical:
//! the validity window is closed and the row becomes reinstatable.

use chrono::NaiveDate;
use param_console_shared::{
    dates, ActiveFilter, CapabilityFlags, ConfigRecord, IndividualParameter, PageInfo,
    SearchRequest, SearchResponse, SpideringAttribute, SpideringEvent,
};
use thiserror::Error;

/// Failures of a store mutation, each mapped to one API error code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(i64),
    #[error("record {0} may not be deleted")]
    DeleteNotAllowed(i64),
    #[error("delete of record {0} failed")]
    DeleteFailed(i64),
    #[error("start date {0:?} is not a date")]
    InvalidStartDate(String),
    #[error("end date is not a date on or after the start date")]
    InvalidDateRange,
    #[error("a record named {0:?} already exists")]
    DuplicateName(String),
    #[error("a reinstated record needs an open or future end date")]
    ReinstateRequiresOpenWindow,
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "RECORD_NOT_FOUND",
            Self::DeleteNotAllowed(_) => "DELETE_NOT_ALLOWED",
            Self::DeleteFailed(_) => "DELETE_FAILED",
            Self::InvalidStartDate(_) => "INVALID_START_DATE",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::DuplicateName(_) => "DUPLICATE_NAME",
            Self::ReinstateRequiresOpenWindow => "REINSTATE_REQUIRES_OPEN_WINDOW",
        }
    }
}

/// Flags a row carries in a given lifecycle state.
pub fn lifecycle_flags(active: bool, deletable: bool) -> CapabilityFlags {
    CapabilityFlags {
        edit_flag: active,
        delete_flag: active && deletable,
        reinstate_flag: !active,
    }
}

/// Records the tables can hold.
pub trait TableRecord: ConfigRecord + Clone {
    /// Name that must be unique among top-level rows, if the record has one.
    fn unique_name(&self) -> Option<&str> {
        None
    }
}

impl TableRecord for IndividualParameter {
    fn unique_name(&self) -> Option<&str> {
        Some(self.name.trim()).filter(|name| !name.is_empty())
    }
}

impl TableRecord for SpideringAttribute {
    fn unique_name(&self) -> Option<&str> {
        Some(self.name.trim()).filter(|name| !name.is_empty())
    }
}

impl TableRecord for SpideringEvent {}

#[derive(Debug, Clone)]
struct Entry<T> {
    record: T,
    parent: Option<i64>,
}

/// Rows of one resource in insertion order.
#[derive(Debug, Clone)]
pub struct RecordTable<T> {
    entries: Vec<Entry<T>>,
    next_id: i64,
}

impl<T> Default for RecordTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: TableRecord> RecordTable<T> {
    /// Store a row under `parent` and return its new id.
    pub fn insert(&mut self, mut record: T, parent: Option<i64>) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        record.set_id(id);
        self.entries.push(Entry {
            record,
            parent,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.entries.iter().map(|entry| &entry.record).find(|record| record.id() == Some(id))
    }

    pub fn first_top_level(&self) -> Option<&T> {
        self.entries.iter().find(|entry| entry.parent.is_none()).map(|entry| &entry.record)
    }

    /// Rows passing `filter` whose entry satisfies `keep`.
    pub fn select(
        &self,
        filter: ActiveFilter,
        today: NaiveDate,
        keep: impl Fn(&T, Option<i64>) -> bool,
    ) -> Vec<T> {
        self.entries
            .iter()
            .filter(|entry| keep(&entry.record, entry.parent))
            .filter(|entry| entry.record.matches(filter, today))
            .map(|entry| entry.record.clone())
            .collect()
    }

    pub fn top_level(&self, filter: ActiveFilter, today: NaiveDate) -> Vec<T> {
        self.select(filter, today, |_, parent| parent.is_none())
    }

    pub fn versions_of(&self, parent_id: i64, filter: ActiveFilter, today: NaiveDate) -> Vec<T> {
        self.select(filter, today, |_, parent| parent == Some(parent_id))
    }

    /// One page of top-level rows, each stamped with its child count.
    pub fn search(
        &self,
        request: &SearchRequest,
        today: NaiveDate,
        child_count: impl Fn(&T) -> u32,
    ) -> SearchResponse<T> {
        let rows = self.top_level(request.active, today);
        let items = request
            .pagination
            .slice(&rows)
            .iter()
            .cloned()
            .map(|mut record| {
                let count = child_count(&record);
                record.set_child_count(count);
                record
            })
            .collect();
        SearchResponse {
            items,
            pagination: PageInfo {
                total_item_count: rows.len(),
            },
        }
    }

    /// Close the validity window of a deletable row.
    pub fn delete(&mut self, id: i64, today: NaiveDate) -> Result<(), StoreError> {
        let entry = self.entry_mut(id)?;
        if !entry.record.flags().delete_flag {
            return Err(StoreError::DeleteNotAllowed(id));
        }
        let closed_on = today.pred_opt().unwrap_or(today);
        entry.record.set_end_date(Some(dates::format_iso(closed_on)));
        *entry.record.flags_mut() = lifecycle_flags(false, false);
        Ok(())
    }

    /// Create (`id` is `None`) or update a row. A set reinstate flag on an
    /// inactive row reopens it.
    pub fn save(&mut self, mut record: T, id: Option<i64>, today: NaiveDate) -> Result<T, StoreError> {
        let start = dates::parse_date(record.start_date())
            .ok_or_else(|| StoreError::InvalidStartDate(record.start_date().to_string()))?;
        let end = match record.end_date().map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(
                dates::parse_date(raw)
                    .filter(|end| *end >= start)
                    .ok_or(StoreError::InvalidDateRange)?,
            ),
            None => None,
        };
        record.set_end_date(end.map(dates::format_iso));
        let active = record.is_active_on(today);

        let Some(id) = id else {
            if let Some(name) = record.unique_name() {
                let taken = self.entries.iter().any(|entry| {
                    entry.parent.is_none() && entry.record.unique_name() == Some(name)
                });
                if taken {
                    return Err(StoreError::DuplicateName(name.to_string()));
                }
            }
            *record.flags_mut() = lifecycle_flags(active, true);
            let id = self.insert(record.clone(), None);
            record.set_id(id);
            return Ok(record);
        };

        let entry = self.entry_mut(id)?;
        let stored = entry.record.flags();
        let reinstating = record.flags().reinstate_flag && stored.reinstate_flag;
        if reinstating && !active {
            return Err(StoreError::ReinstateRequiresOpenWindow);
        }
        let deletable = reinstating || stored.delete_flag;
        record.set_id(id);
        record.set_child_count(entry.record.child_count());
        *record.flags_mut() = lifecycle_flags(active, deletable);
        entry.record = record.clone();
        Ok(record)
    }

    fn entry_mut(&mut self, id: i64) -> Result<&mut Entry<T>, StoreError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.record.id() == Some(id))
            .ok_or(StoreError::NotFound(id))
    }
}

/// All tables of the mock API.
#[derive(Debug, Default)]
pub struct Store {
    pub parameters: RecordTable<IndividualParameter>,
    pub attributes: RecordTable<SpideringAttribute>,
    pub events: RecordTable<SpideringEvent>,
}

impl Store {
    /// Top-level events attached to one attribute.
    pub fn attribute_events(
        &self,
        spa_id: i64,
        filter: ActiveFilter,
        today: NaiveDate,
    ) -> Vec<SpideringEvent> {
        self.events.select(filter, today, |event, parent| {
            parent.is_none() && event.spa_id == Some(spa_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
    }

    fn parameter(name: &str, end_date: Option<&str>, flags: CapabilityFlags) -> IndividualParameter {
        IndividualParameter {
            name: name.to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: end_date.map(str::to_string),
            flags,
            ..Default::default()
        }
    }

    fn table() -> RecordTable<IndividualParameter> {
        let mut table = RecordTable::default();
        let lookback = table.insert(parameter("LOOKBACK_DAYS", None, lifecycle_flags(true, true)), None);
        table.insert(
            parameter("LOOKBACK_DAYS", Some("2024-12-31"), lifecycle_flags(false, false)),
            Some(lookback),
        );
        table.insert(parameter("AUTO_CLOSE_DAYS", None, lifecycle_flags(true, false)), None);
        table.insert(
            parameter("HIGH_RISK_SCORE", Some("2025-01-31"), lifecycle_flags(false, false)),
            None,
        );
        table
    }

    #[test]
    fn search_filters_pages_and_counts_children() {
        let table = table();
        let request = SearchRequest {
            pagination: param_console_shared::PageRequest::for_page_index(0, 1),
            active: ActiveFilter::Active,
        };

        let page = table.search(&request, today(), |record| {
            record
                .id()
                .map_or(0, |id| table.versions_of(id, ActiveFilter::All, today()).len() as u32)
        });

        assert_eq!(page.pagination.total_item_count, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "LOOKBACK_DAYS");
        assert_eq!(page.items[0].child_list_count, 1);
    }

    #[test]
    fn inactive_filter_excludes_versions_from_top_level() {
        let table = table();
        let rows = table.top_level(ActiveFilter::Inactive, today());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "HIGH_RISK_SCORE");
    }

    #[test]
    fn delete_closes_window_and_allows_reinstate() {
        let mut table = table();
        table.delete(1, today()).expect("row 1 is deletable");

        let record = table.get(1).expect("row 1 still stored");
        assert_eq!(record.end_date.as_deref(), Some("2025-06-14"));
        assert!(!record.is_active_on(today()));
        assert!(record.capabilities().can_reinstate());
        assert!(!record.capabilities().can_delete());
    }

    #[test]
    fn delete_respects_flags_and_ids() {
        let mut table = table();
        assert_eq!(table.delete(3, today()), Err(StoreError::DeleteNotAllowed(3)));
        assert_eq!(table.delete(99, today()), Err(StoreError::NotFound(99)));
    }

    #[test]
    fn save_validates_dates() {
        let mut table = table();
        let mut record = parameter("NEW", None, CapabilityFlags::default());
        record.start_date = "soon".to_string();
        assert_eq!(
            table.save(record.clone(), None, today()),
            Err(StoreError::InvalidStartDate("soon".to_string()))
        );

        record.start_date = "2025-03-01".to_string();
        record.end_date = Some("2025-02-01".to_string());
        assert_eq!(table.save(record, None, today()), Err(StoreError::InvalidDateRange));
    }

    #[test]
    fn create_assigns_id_and_rejects_duplicate_names() {
        let mut table = table();
        let created = table
            .save(parameter("MIN_CLAIM_AMOUNT", None, CapabilityFlags::default()), None, today())
            .expect("valid record");
        assert_eq!(created.par_id, Some(5));
        assert!(created.capabilities().can_edit());
        assert!(created.capabilities().can_delete());

        let duplicate = parameter("AUTO_CLOSE_DAYS", None, CapabilityFlags::default());
        assert_eq!(
            table.save(duplicate, None, today()),
            Err(StoreError::DuplicateName("AUTO_CLOSE_DAYS".to_string()))
        );
    }

    #[test]
    fn reinstate_reopens_an_inactive_row() {
        let mut table = table();
        let mut record = table.get(4).cloned().expect("row 4 stored");
        record.end_date = None;
        record.flags.reinstate_flag = true;

        let saved = table.save(record, Some(4), today()).expect("reinstate succeeds");
        assert!(saved.is_active_on(today()));
        assert!(saved.capabilities().can_edit());
        assert!(saved.capabilities().can_delete());
        assert_eq!(table.top_level(ActiveFilter::Active, today()).len(), 3);
    }

    #[test]
    fn reinstate_with_past_end_date_is_rejected() {
        let mut table = table();
        let mut record = table.get(4).cloned().expect("row 4 stored");
        record.flags.reinstate_flag = true;
        assert_eq!(
            table.save(record, Some(4), today()),
            Err(StoreError::ReinstateRequiresOpenWindow)
        );
    }

    #[test]
    fn update_keeps_server_flags() {
        let mut table = table();
        let mut record = table.get(3).cloned().expect("row 3 stored");
        record.flags.delete_flag = true;
        record.text_value = Some("30".to_string());

        let saved = table.save(record, Some(3), today()).expect("update succeeds");
        assert!(!saved.capabilities().can_delete());
        assert_eq!(table.get(3).and_then(|row| row.text_value.clone()), Some("30".to_string()));
    }
}
