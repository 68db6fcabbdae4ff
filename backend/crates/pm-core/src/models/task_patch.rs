use crate::{Task, TaskStatus};

use uuid::Uuid;

/// Partial update for a task. `project_id` is immutable and has no patch field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub status: Option<TaskStatus>,
    /// `Some(None)` clears the assignee, `None` leaves it untouched
    pub assignee_id: Option<Option<Uuid>>,
}

impl TaskPatch {
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(name) = &self.name {
            task.name = name.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(assignee_id) = self.assignee_id {
            task.assignee_id = assignee_id;
        }
    }
}
