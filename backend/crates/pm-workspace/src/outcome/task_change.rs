use crate::SyncOutcome;

use pm_core::Task;

/// A created or updated task together with its project's sync result.
#[derive(Debug)]
pub struct TaskChange {
    pub task: Task,
    pub sync: SyncOutcome,
}
