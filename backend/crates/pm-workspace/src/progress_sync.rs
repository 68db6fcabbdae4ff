//! Recompute-on-write synchronization of a project's derived progress.

use crate::{Result as WorkspaceErrorResult, SyncOutcome, WorkspaceError};

use pm_core::{Project, compute_progress};
use pm_db::WorkspaceStore;

use std::sync::Arc;

use log::{debug, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProgressSynchronizer {
    store: Arc<dyn WorkspaceStore>,
}

impl ProgressSynchronizer {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    /// Recompute `progress` (and promote to Completed at 100) from the
    /// project's current tasks. `None` when the project no longer exists.
    ///
    /// Only the derived columns are written, so this is safe to call
    /// repeatedly and never clobbers a concurrent name or date edit.
    pub async fn sync(&self, project_id: Uuid) -> WorkspaceErrorResult<Option<Project>> {
        let tasks = self.store.list_tasks_by_project(project_id).await?;
        let update = compute_progress(&tasks);

        let project = self
            .store
            .update_project(project_id, &update.to_patch())
            .await?;

        match &project {
            Some(p) => debug!(
                "Synced project {}: {} task(s), progress={}, status={}",
                project_id,
                tasks.len(),
                p.progress,
                p.status
            ),
            None => debug!("Skipped sync for missing project {}", project_id),
        }

        Ok(project)
    }

    /// Like [`sync`](Self::sync), but folds failures into the outcome so an
    /// already-committed task write is still reported as a success.
    pub async fn sync_outcome(&self, project_id: Uuid) -> SyncOutcome {
        match self.sync(project_id).await {
            Ok(Some(project)) => SyncOutcome::Synced(project),
            Ok(None) => SyncOutcome::ProjectMissing,
            Err(e) => {
                warn!("Progress sync failed for project {}: {}", project_id, e);
                SyncOutcome::Failed(WorkspaceError::transient_sync_failure(project_id, &e))
            }
        }
    }
}
