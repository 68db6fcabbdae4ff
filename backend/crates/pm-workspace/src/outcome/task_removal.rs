use crate::SyncOutcome;

use pm_core::Task;

#[derive(Debug)]
pub struct TaskRemoval {
    /// The task as it was before deletion
    pub task: Task,
    pub sync: SyncOutcome,
}
