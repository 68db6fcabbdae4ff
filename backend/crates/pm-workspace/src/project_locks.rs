//! Per-project mutation locks.
//!
//! Every operation that changes a project's task set holds the project's lock
//! across the store write and the progress sync that follows it. Operations on
//! different projects never contend.
//!
//! An entry lives only while someone holds or waits for it, so ids that never
//! name a project cannot grow the map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

type LockMap = HashMap<Uuid, Arc<Mutex<()>>>;

#[derive(Debug, Clone, Default)]
pub struct ProjectLocks {
    // Never held across an await
    locks: Arc<StdMutex<LockMap>>,
}

/// Exclusive access to one project until dropped.
#[derive(Debug)]
pub struct ProjectLockGuard {
    // Field order matters: the mutex is released before the entry is pruned
    _guard: OwnedMutexGuard<()>,
    _entry: LockEntry,
}

/// A caller's claim on a map entry. The last claim to go removes the entry.
#[derive(Debug)]
struct LockEntry {
    project_id: Uuid,
    lock: Arc<Mutex<()>>,
    locks: Arc<StdMutex<LockMap>>,
}

impl Drop for LockEntry {
    fn drop(&mut self) {
        let mut locks = lock_map(&self.locks);

        // One handle in the map, one here: nobody else holds or waits
        if let Some(current) = locks.get(&self.project_id)
            && Arc::ptr_eq(current, &self.lock)
            && Arc::strong_count(&self.lock) == 2
        {
            locks.remove(&self.project_id);
        }
    }
}

fn lock_map(locks: &StdMutex<LockMap>) -> MutexGuard<'_, LockMap> {
    locks.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ProjectLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `project_id`.
    pub async fn acquire(&self, project_id: Uuid) -> ProjectLockGuard {
        let entry = {
            let mut locks = lock_map(&self.locks);
            LockEntry {
                project_id,
                lock: Arc::clone(locks.entry(project_id).or_default()),
                locks: Arc::clone(&self.locks),
            }
        };

        let guard = Arc::clone(&entry.lock).lock_owned().await;

        ProjectLockGuard {
            _guard: guard,
            _entry: entry,
        }
    }

    /// Number of projects currently locked or awaited
    pub fn len(&self) -> usize {
        lock_map(&self.locks).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
