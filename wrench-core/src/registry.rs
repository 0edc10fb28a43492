//! Per-record ownership registry
//!
//! Every repair record has a single logical owner: all lifecycle mutations
//! for one receipt go through one `tokio::sync::Mutex`, so two concurrent
//! transitions serialize instead of losing updates. Records are independent
//! aggregates; there is no cross-record locking.

use dashmap::DashMap;
use shared::models::RepairRecord;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Owning handle for a single record
pub type RecordHandle = Arc<Mutex<RepairRecord>>;

/// Registry handing out one owning handle per receipt id
#[derive(Debug, Default)]
pub struct RecordRegistry {
    records: DashMap<String, RecordHandle>,
}

impl RecordRegistry {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Register a freshly fetched record, returning its owning handle.
    ///
    /// If the id is already registered the existing handle is returned and
    /// the fetched copy is discarded: a list refresh must not clobber a
    /// record another task is mid-mutation on.
    pub fn checkout(&self, record: RepairRecord) -> RecordHandle {
        self.records
            .entry(record.id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(record)))
            .value()
            .clone()
    }

    /// Handle for an already-registered record
    pub fn get(&self, id: &str) -> Option<RecordHandle> {
        self.records.get(id).map(|entry| entry.value().clone())
    }

    /// Drop a record, e.g. when its owning view is dismissed
    pub fn remove(&self, id: &str) -> Option<RecordHandle> {
        self.records.remove(id).map(|(_, handle)| handle)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
