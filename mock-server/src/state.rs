use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    /// Seeded tables, mutated by save and delete
    store: Arc<RwLock<Store>>,
    /// Deletes of this id fail with a server error
    fail_delete_id: Option<i64>,
    /// Pinned date for deterministic activity checks
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(store: Store, fail_delete_id: Option<i64>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            fail_delete_id,
            fixed_today: None,
        }
    }

    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }

    pub fn fail_delete_id(&self) -> Option<i64> {
        self.fail_delete_id
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }
}
