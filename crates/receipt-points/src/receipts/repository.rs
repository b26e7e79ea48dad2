use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::domain::{Receipt, ReceiptId, ReceiptRecord};

/// Append-only storage for scored receipts.
///
/// `put` owns identifier assignment: implementations must never hand out an id that is
/// already stored and must never overwrite an existing record.
pub trait ReceiptRepository: Send + Sync {
    fn put(&self, receipt: Receipt, points: u64) -> Result<ReceiptId, RepositoryError>;
    fn get(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError>;
    fn len(&self) -> Result<usize, RepositoryError>;

    fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime receipt store backed by a mutex-guarded map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReceiptRepository {
    records: Arc<Mutex<HashMap<ReceiptId, ReceiptRecord>>>,
}

impl InMemoryReceiptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ReceiptId, ReceiptRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("receipt store mutex poisoned".to_string()))
    }
}

impl ReceiptRepository for InMemoryReceiptRepository {
    fn put(&self, receipt: Receipt, points: u64) -> Result<ReceiptId, RepositoryError> {
        let mut guard = self.lock()?;
        // Id assignment and insertion share the lock, so a collision is retried, never stored.
        loop {
            let id = ReceiptId(Uuid::new_v4().to_string());
            if let Entry::Vacant(slot) = guard.entry(id.clone()) {
                slot.insert(ReceiptRecord {
                    id: id.clone(),
                    receipt,
                    points,
                });
                return Ok(id);
            }
        }
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }
}
